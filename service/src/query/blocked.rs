//! [`Query`] collections related to [`BlockedPeriod`]s.

use common::{
    operations::{By, Select},
    Day,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{property, BlockedPeriod},
    infra::{store, Store},
    Service,
};

use super::Query;

/// [`Query`] of the [`BlockedPeriod`] covering a property day, if any.
///
/// The first-recorded covering period wins when records overlap.
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
        Select<By<Vec<BlockedPeriod>, property::Id>>,
        Ok = Vec<BlockedPeriod>,
        Err = Traced<store::Error>,
    >,
{
    type Ok = Option<BlockedPeriod>;
    type Err = Traced<ExecutionError>;

    fn execute(&self, query: OnDay) -> Result<Self::Ok, Self::Err> {
        let OnDay { property_id, day } = query;

        let periods = self
            .store()
            .execute(Select(By::<Vec<BlockedPeriod>, _>::new(property_id)))
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))?;

        Ok(periods.into_iter().find(|p| p.covers(day)))
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
