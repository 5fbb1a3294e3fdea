//! [`Query`] collections related to [`Booking`]s.

use common::{
    operations::{By, Select},
    Day,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{booking::Status, property, Booking},
    infra::{store, Store},
    Service,
};

use super::Query;

/// [`Query`] of the [`Booking`]s visually occupying a property day.
///
/// The departure day counts (the check-out half-segment renders in its
/// cell); cancelled bookings don't.
#[derive(Clone, Copy, Debug)]
pub struct OnDay {
    /// ID of the [`Property`] to inspect.
    ///
    /// [`Property`]: crate::domain::Property
    pub property_id: property::Id,

    /// [`Day`] to inspect.
    pub day: Day,
}

impl<S> Query<OnDay> for Service<S>
where
    S: Store<
        Select<By<Vec<Booking>, property::Id>>,
        Ok = Vec<Booking>,
        Err = Traced<store::Error>,
    >,
{
    type Ok = Vec<Booking>;
    type Err = Traced<ExecutionError>;

    fn execute(&self, query: OnDay) -> Result<Self::Ok, Self::Err> {
        let OnDay { property_id, day } = query;

        let mut bookings = self
            .store()
            .execute(Select(By::<Vec<Booking>, _>::new(property_id)))
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))?;
        bookings
            .retain(|b| b.status != Status::Cancelled && b.occupies(day));

        Ok(bookings)
    }
}

/// Error of [`OnDay`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    #[from]
    Store(store::Error),
}
