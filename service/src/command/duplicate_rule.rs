//! [`Command`] for duplicating a [`PricingRule`] to other properties.

use common::operations::{By, Insert, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        property,
        rule::{self, PricingRule, Scope},
        Property,
    },
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for duplicating a [`PricingRule`] onto other properties.
///
/// Each target property gets its own copy with a fresh ID, scoped to that
/// property and appended to the rule set — so the clones are the most
/// recently created rules and win equal-priority tie-breaks.
#[derive(Clone, Debug)]
pub struct DuplicateRule {
    /// ID of the [`PricingRule`] to duplicate.
    pub id: rule::Id,

    /// Properties to duplicate the rule onto.
    pub target_property_ids: Vec<property::Id>,
}

impl<S> Command<DuplicateRule> for Service<S>
where
    S: Store<
            Select<By<Option<PricingRule>, rule::Id>>,
            Ok = Option<PricingRule>,
            Err = Traced<store::Error>,
        > + Store<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<store::Error>,
        > + Store<Insert<PricingRule>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Vec<PricingRule>;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: DuplicateRule) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DuplicateRule {
            id,
            target_property_ids,
        } = cmd;

        let original = self
            .store()
            .execute(Select(By::<Option<PricingRule>, _>::new(id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RuleNotExists(id))
            .map_err(tracerr::wrap!())?;

        let mut clones = Vec::with_capacity(target_property_ids.len());
        for property_id in target_property_ids {
            self.store()
                .execute(Select(By::<Option<Property>, _>::new(property_id)))
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::PropertyNotExists(property_id))
                .map_err(tracerr::wrap!())
                .map(drop)?;

            let clone = PricingRule {
                id: rule::Id::new(),
                scope: Scope::Property(property_id),
                ..original.clone()
            };
            self.store()
                .execute(Insert(clone.clone()))
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            clones.push(clone);
        }

        log::debug!(
            "duplicated `PricingRule(id: {id})` onto {} properties",
            clones.len(),
        );

        Ok(clones)
    }
}

/// Error of [`DuplicateRule`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    #[from]
    Store(store::Error),

    /// [`PricingRule`] with the provided ID does not exist.
    #[display("`PricingRule(id: {_0})` does not exist")]
    RuleNotExists(#[error(not(source))] rule::Id),

    /// [`Property`] with the provided ID does not exist.
    #[display("`Property(id: {_0})` does not exist")]
    PropertyNotExists(#[error(not(source))] property::Id),
}
