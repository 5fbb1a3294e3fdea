//! [`Query`] composing a full calendar row for a property.

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    calendar::{layout, DateWindow, Selection},
    domain::{booking::Status, property, BlockedPeriod, Booking, PricingRule, Property},
    infra::{store, Store},
    pricing,
    read::calendar::{DayCell, RowViewModel},
    Service,
};

use super::Query;

/// [`Query`] composing one property row of the calendar grid over a visible
/// [`DateWindow`]: per-day pricing cells plus laid-out segments.
///
/// Pure orchestration of the pricing and layout engines; the caller owns
/// the [`Selection`] state machine and passes it in for cell highlighting.
#[derive(Clone, Copy, Debug)]
pub struct Row {
    /// ID of the [`Property`] the row renders.
    pub property_id: property::Id,

    /// Visible window of the grid.
    pub window: DateWindow,

    /// Current selection, for cell highlighting.
    pub selection: Selection,
}

impl<S> Query<Row> for Service<S>
where
    S: Store<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<store::Error>,
        > + Store<
            Select<By<Vec<PricingRule>, ()>>,
            Ok = Vec<PricingRule>,
            Err = Traced<store::Error>,
        > + Store<
            Select<By<Vec<Booking>, property::Id>>,
            Ok = Vec<Booking>,
            Err = Traced<store::Error>,
        > + Store<
            Select<By<Vec<BlockedPeriod>, property::Id>>,
            Ok = Vec<BlockedPeriod>,
            Err = Traced<store::Error>,
        >,
{
    type Ok = RowViewModel;
    type Err = Traced<ExecutionError>;

    fn execute(&self, query: Row) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Row {
            property_id,
            window,
            selection,
        } = query;

        let property = self
            .store()
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())?;
        let rules = self
            .store()
            .execute(Select(By::<Vec<PricingRule>, _>::new(())))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let bookings = self
            .store()
            .execute(Select(By::<Vec<Booking>, _>::new(property_id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let blocked = self
            .store()
            .execute(Select(By::<Vec<BlockedPeriod>, _>::new(property_id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let cells = window
            .days()
            .map(|day| {
                let matches = pricing::match_rules(&rules, property_id, day);
                DayCell {
                    day,
                    pricing: pricing::resolve(
                        self.config().pricing,
                        property.nightly_rate,
                        &matches,
                    ),
                    occupied: bookings.iter().any(|b| {
                        b.status != Status::Cancelled && b.occupies(day)
                    }),
                    selected: selection.contains(day),
                }
            })
            .collect();

        Ok(RowViewModel {
            cells,
            layout: layout::layout_row(
                &bookings,
                &blocked,
                window,
                self.config().calendar,
            ),
        })
    }
}

/// Error of [`Row`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    #[from]
    Store(store::Error),

    /// [`Property`] with the provided ID does not exist.
    #[display("`Property(id: {_0})` does not exist")]
    PropertyNotExists(#[error(not(source))] property::Id),
}
