//! [`Command`] for widening a [`PricingRule`] to all properties.

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::rule::{self, PricingRule, Scope},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] rewriting a [`PricingRule`]'s scope to cover all properties.
#[derive(Clone, Copy, Debug)]
pub struct ApplyRuleToAll {
    /// ID of the [`PricingRule`] to widen.
    pub id: rule::Id,
}

impl<S> Command<ApplyRuleToAll> for Service<S>
where
    S: Store<
            Select<By<Option<PricingRule>, rule::Id>>,
            Ok = Option<PricingRule>,
            Err = Traced<store::Error>,
        > + Store<Update<PricingRule>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = PricingRule;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: ApplyRuleToAll) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ApplyRuleToAll { id } = cmd;

        let mut rule = self
            .store()
            .execute(Select(By::<Option<PricingRule>, _>::new(id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RuleNotExists(id))
            .map_err(tracerr::wrap!())?;

        rule.scope = Scope::AllProperties;
        self.store()
            .execute(Update(rule.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::debug!("widened `PricingRule(id: {id})` to all properties");

        Ok(rule)
    }
}

/// Error of [`ApplyRuleToAll`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    #[from]
    Store(store::Error),

    /// [`PricingRule`] with the provided ID does not exist.
    #[display("`PricingRule(id: {_0})` does not exist")]
    RuleNotExists(#[error(not(source))] rule::Id),
}
