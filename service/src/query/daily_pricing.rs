//! [`Query`] resolving the effective [`DailyPricing`] of a property day.

use common::{
    operations::{By, Select},
    Day,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{property, PricingRule, Property},
    infra::{store, Store},
    pricing,
    read::pricing::DailyPricing,
    Service,
};

use super::Query;

/// [`Query`] of the effective [`DailyPricing`] of a property on a single
/// day.
///
/// Recomputed in full on every execution, with no cache in between: a rule
/// mutation is visible to the very next query.
#[derive(Clone, Copy, Debug)]
pub struct ForDay {
    /// ID of the [`Property`] to price.
    pub property_id: property::Id,

    /// [`Day`] to price.
    pub day: Day,
}

impl<S> Query<ForDay> for Service<S>
where
    S: Store<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<store::Error>,
        > + Store<
            Select<By<Vec<PricingRule>, ()>>,
            Ok = Vec<PricingRule>,
            Err = Traced<store::Error>,
        >,
{
    type Ok = DailyPricing;
    type Err = Traced<ExecutionError>;

    fn execute(&self, query: ForDay) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ForDay { property_id, day } = query;

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

        let matches = pricing::match_rules(&rules, property_id, day);
        Ok(pricing::resolve(
            self.config().pricing,
            property.nightly_rate,
            &matches,
        ))
    }
}

/// Error of [`ForDay`] [`Query`] execution.
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
