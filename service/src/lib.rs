//! Engine of the short-term-rental back-office calendar: pricing-rule
//! resolution, segment layout and multi-day selection.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod calendar;
pub mod command;
pub mod domain;
pub mod infra;
pub mod pricing;
pub mod query;
pub mod read;

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// [`calendar`] layout configuration.
    pub calendar: calendar::Config,

    /// [`pricing`] engine configuration.
    pub pricing: pricing::Config,
}

/// Domain service exposing the back-office engine.
///
/// All operations run synchronously on the caller's thread: a mutation is
/// guaranteed visible to the very next query.
#[derive(Clone, Debug)]
pub struct Service<S> {
    /// Configuration of this [`Service`].
    config: Config,

    /// Store backing this [`Service`].
    store: S,
}

impl<S> Service<S> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, store: S) -> Self {
        Self { config, store }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the store of this [`Service`].
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
