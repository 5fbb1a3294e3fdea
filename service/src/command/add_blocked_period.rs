//! [`Command`] for recording a new [`BlockedPeriod`].

use common::{
    operations::{By, Insert, Select},
    DaySpan,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        blocked::{self, BlockReason, BlockedPeriod, CleaningSchedule},
        property, Property,
    },
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for taking a [`Property`] off the market over a range of
/// days.
#[derive(Clone, Debug)]
pub struct AddBlockedPeriod {
    /// ID of the [`Property`] to block.
    pub property_id: property::Id,

    /// Inclusive range of days to block.
    pub span: DaySpan,

    /// Why the property is blocked.
    pub reason: BlockReason,

    /// Cleaning slotted into the blocked period, if any.
    pub cleaning: Option<CleaningSchedule>,
}

impl<S> Command<AddBlockedPeriod> for Service<S>
where
    S: Store<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<store::Error>,
        > + Store<Insert<BlockedPeriod>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = BlockedPeriod;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: AddBlockedPeriod) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddBlockedPeriod {
            property_id,
            span,
            reason,
            cleaning,
        } = cmd;

        self.store()
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let period = BlockedPeriod {
            id: blocked::Id::new(),
            property_id,
            span,
            reason,
            cleaning,
        };
        self.store()
            .execute(Insert(period.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::debug!("recorded `BlockedPeriod(id: {})`", period.id);

        Ok(period)
    }
}

/// Error of [`AddBlockedPeriod`] [`Command`] execution.
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
