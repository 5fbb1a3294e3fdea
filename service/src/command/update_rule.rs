//! [`Command`] for editing an existing [`PricingRule`].

use common::{
    operations::{By, Select, Update},
    DaySpan,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::rule::{self, Action, PricingRule},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for editing fields of an existing [`PricingRule`] in place.
///
/// Only the provided fields change; the rule keeps its creation position,
/// so equal-priority tie-breaks are unaffected by edits. Toggling
/// `enabled` is the enable/disable switch.
#[derive(Clone, Debug, Default)]
pub struct UpdateRule {
    /// ID of the [`PricingRule`] to edit.
    pub id: rule::Id,

    /// New name, if changing.
    pub name: Option<rule::Name>,

    /// New enabled state, if changing.
    pub enabled: Option<bool>,

    /// New priority, if changing.
    pub priority: Option<rule::Priority>,

    /// New applicability range, if changing.
    pub span: Option<DaySpan>,

    /// New payload, if changing.
    pub action: Option<Action>,
}

impl<S> Command<UpdateRule> for Service<S>
where
    S: Store<
            Select<By<Option<PricingRule>, rule::Id>>,
            Ok = Option<PricingRule>,
            Err = Traced<store::Error>,
        > + Store<Update<PricingRule>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = PricingRule;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: UpdateRule) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateRule {
            id,
            name,
            enabled,
            priority,
            span,
            action,
        } = cmd;

        let mut rule = self
            .store()
            .execute(Select(By::<Option<PricingRule>, _>::new(id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RuleNotExists(id))
            .map_err(tracerr::wrap!())?;

        if let Some(name) = name {
            rule.name = name;
        }
        if let Some(enabled) = enabled {
            rule.enabled = enabled;
        }
        if let Some(priority) = priority {
            rule.priority = priority;
        }
        if let Some(span) = span {
            rule.span = span;
        }
        if let Some(action) = action {
            rule.action = action;
        }

        self.store()
            .execute(Update(rule.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::debug!("updated `PricingRule(id: {id})`");

        Ok(rule)
    }
}

/// Error of [`UpdateRule`] [`Command`] execution.
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
