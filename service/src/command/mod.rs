//! [`Command`] definition.

pub mod add_blocked_period;
pub mod add_booking;
pub mod add_property;
pub mod apply_rule_to_all;
pub mod create_rule;
pub mod delete_rule;
pub mod duplicate_rule;
pub mod update_rule;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_blocked_period::AddBlockedPeriod, add_booking::AddBooking,
    add_property::AddProperty, apply_rule_to_all::ApplyRuleToAll,
    create_rule::CreateRule, delete_rule::DeleteRule,
    duplicate_rule::DuplicateRule, update_rule::UpdateRule,
};
