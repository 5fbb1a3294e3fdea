//! Store abstraction over the single-writer back-office document.

pub mod memory;

use derive_more::{Display, Error as StdError};

use crate::domain::{property, rule};

pub use self::memory::InMemory;

/// Store operation.
pub use common::Handler as Store;

/// [`Store`] error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// [`Property`] with the provided ID does not exist.
    ///
    /// [`Property`]: crate::domain::Property
    #[display("`Property(id: {_0})` does not exist")]
    PropertyNotFound(#[error(not(source))] property::Id),

    /// [`PricingRule`] with the provided ID does not exist.
    ///
    /// [`PricingRule`]: crate::domain::PricingRule
    #[display("`PricingRule(id: {_0})` does not exist")]
    RuleNotFound(#[error(not(source))] rule::Id),
}
