//! [`Command`] for registering a new [`Property`].

use common::{operations::Insert, Money};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{property, Property},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for registering a new [`Property`].
#[derive(Clone, Debug)]
pub struct AddProperty {
    /// Name of the new [`Property`].
    pub name: property::Name,

    /// Default nightly rate of the new [`Property`].
    pub nightly_rate: Money,
}

impl<S> Command<AddProperty> for Service<S>
where
    S: Store<Insert<Property>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Property;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: AddProperty) -> Result<Self::Ok, Self::Err> {
        let AddProperty { name, nightly_rate } = cmd;

        let property = Property {
            id: property::Id::new(),
            name,
            nightly_rate,
        };
        self.store()
            .execute(Insert(property.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))?;

        log::debug!("registered `Property(id: {})`", property.id);

        Ok(property)
    }
}

/// Error of [`AddProperty`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    #[from]
    Store(store::Error),
}
