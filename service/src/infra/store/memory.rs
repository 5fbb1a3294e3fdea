//! In-memory [`Store`] implementation.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use common::{
    operations::{By, Delete, Insert, Select, Update},
    Handler,
};
use tracerr::Traced;

use crate::domain::{
    property, rule, BlockedPeriod, Booking, PricingRule, Property,
};

#[cfg(doc)]
use super::Store;
use super::Error;

/// In-memory single-writer document backing the [`Store`] operations.
///
/// Stands in for real persistence: one admin session mutates it directly,
/// and every operation completes synchronously.
#[derive(Debug, Default)]
pub struct InMemory {
    /// Guarded state of this [`InMemory`] store.
    state: RwLock<State>,
}

/// State of an [`InMemory`] store.
#[derive(Debug, Default)]
struct State {
    /// Known [`Property`]s.
    properties: Vec<Property>,

    /// [`PricingRule`]s, strictly in creation order.
    ///
    /// Equal-priority matching relies on this order for its tie-break, so
    /// updates edit in place and inserts append.
    rules: Vec<PricingRule>,

    /// Known [`Booking`]s.
    bookings: Vec<Booking>,

    /// Known [`BlockedPeriod`]s.
    blocked: Vec<BlockedPeriod>,
}

impl InMemory {
    /// Acquires the read guard of the state.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires the write guard of the state.
    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Handler<Insert<Property>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &self,
        Insert(property): Insert<Property>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write().properties.push(property);
        Ok(())
    }
}

impl Handler<Select<By<Option<Property>, property::Id>>> for InMemory {
    type Ok = Option<Property>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.read().properties.iter().find(|p| p.id == id).cloned())
    }
}

impl Handler<Insert<PricingRule>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &self,
        Insert(rule): Insert<PricingRule>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write().rules.push(rule);
        Ok(())
    }
}

impl Handler<Update<PricingRule>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &self,
        Update(rule): Update<PricingRule>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.write();
        let slot = state
            .rules
            .iter_mut()
            .find(|r| r.id == rule.id)
            .ok_or(Error::RuleNotFound(rule.id))
            .map_err(tracerr::wrap!())?;
        *slot = rule;
        Ok(())
    }
}

impl Handler<Delete<By<PricingRule, rule::Id>>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &self,
        Delete(by): Delete<By<PricingRule, rule::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let mut state = self.write();
        let position = state
            .rules
            .iter()
            .position(|r| r.id == id)
            .ok_or(Error::RuleNotFound(id))
            .map_err(tracerr::wrap!())?;
        drop(state.rules.remove(position));
        Ok(())
    }
}

impl Handler<Select<By<Option<PricingRule>, rule::Id>>> for InMemory {
    type Ok = Option<PricingRule>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<PricingRule>, rule::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.read().rules.iter().find(|r| r.id == id).cloned())
    }
}

impl Handler<Select<By<Vec<PricingRule>, ()>>> for InMemory {
    type Ok = Vec<PricingRule>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        _: Select<By<Vec<PricingRule>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.read().rules.clone())
    }
}

impl Handler<Insert<Booking>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &self,
        Insert(booking): Insert<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write().bookings.push(booking);
        Ok(())
    }
}

impl Handler<Select<By<Vec<Booking>, property::Id>>> for InMemory {
    type Ok = Vec<Booking>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Booking>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .read()
            .bookings
            .iter()
            .filter(|b| b.property_id == id)
            .cloned()
            .collect())
    }
}

impl Handler<Insert<BlockedPeriod>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &self,
        Insert(period): Insert<BlockedPeriod>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write().blocked.push(period);
        Ok(())
    }
}

impl Handler<Select<By<Vec<BlockedPeriod>, property::Id>>> for InMemory {
    type Ok = Vec<BlockedPeriod>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Select(by): Select<By<Vec<BlockedPeriod>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .read()
            .blocked
            .iter()
            .filter(|b| b.property_id == id)
            .cloned()
            .collect())
    }
}
