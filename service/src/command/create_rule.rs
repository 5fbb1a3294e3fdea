//! [`Command`] for creating a new [`PricingRule`].

use common::{
    operations::{By, Insert, Select},
    DaySpan,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        property,
        rule::{self, Action, PricingRule, Scope},
        Property,
    },
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`PricingRule`].
///
/// The new rule appends to the rule set, making it the most recently
/// created one: on equal-priority conflicts it wins.
#[derive(Clone, Debug)]
pub struct CreateRule {
    /// Name of the new [`PricingRule`].
    pub name: rule::Name,

    /// [`Scope`] of the new [`PricingRule`].
    pub scope: Scope,

    /// Whether the new [`PricingRule`] starts enabled.
    pub enabled: bool,

    /// [`rule::Priority`] of the new [`PricingRule`].
    pub priority: rule::Priority,

    /// Inclusive range of days the new [`PricingRule`] applies to.
    pub span: DaySpan,

    /// Type-specific payload of the new [`PricingRule`].
    pub action: Action,
}

impl<S> Command<CreateRule> for Service<S>
where
    S: Store<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<store::Error>,
        > + Store<Insert<PricingRule>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = PricingRule;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: CreateRule) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateRule {
            name,
            scope,
            enabled,
            priority,
            span,
            action,
        } = cmd;

        if let Scope::Property(property_id) = scope {
            self.store()
                .execute(Select(By::<Option<Property>, _>::new(property_id)))
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::PropertyNotExists(property_id))
                .map_err(tracerr::wrap!())
                .map(drop)?;
        }

        let rule = PricingRule {
            id: rule::Id::new(),
            name,
            scope,
            enabled,
            priority,
            span,
            action,
        };
        self.store()
            .execute(Insert(rule.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::debug!("created `PricingRule(id: {})`", rule.id);

        Ok(rule)
    }
}

/// Error of [`CreateRule`] [`Command`] execution.
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
