//! [`Command`] for deleting a [`PricingRule`].

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{rule, PricingRule},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`PricingRule`] explicitly.
///
/// Deletion is the only way a rule leaves the set: rules never expire on
/// their own.
#[derive(Clone, Copy, Debug)]
pub struct DeleteRule {
    /// ID of the [`PricingRule`] to delete.
    pub id: rule::Id,
}

impl<S> Command<DeleteRule> for Service<S>
where
    S: Store<Delete<By<PricingRule, rule::Id>>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: DeleteRule) -> Result<Self::Ok, Self::Err> {
        let DeleteRule { id } = cmd;

        self.store()
            .execute(Delete(By::<PricingRule, _>::new(id)))
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))?;

        log::debug!("deleted `PricingRule(id: {id})`");

        Ok(())
    }
}

/// Error of [`DeleteRule`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    #[from]
    Store(store::Error),
}
