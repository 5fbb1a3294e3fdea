//! Per-day pricing read model.

use common::{Money, Percent};

use crate::domain::{blocked::BlockReason, booking::Channel, rule};

/// Effective pricing of a single property day.
///
/// Derived fresh from the rule set on every query and never cached, so it
/// reflects rule edits immediately.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DailyPricing {
    /// Default nightly rate the computation started from.
    pub base_price: Money,

    /// Price-affecting adjustments actually applied, in application order.
    pub adjustments: Vec<Adjustment>,

    /// Resulting nightly price, rounded to 2 decimal places.
    pub final_price: Money,

    /// Minimum stay required to book this day.
    pub min_stay: rule::NumNights,

    /// Maximum stay allowed over this day, if any rule caps it.
    pub max_stay: Option<rule::NumNights>,

    /// Whether the day is closed for booking.
    ///
    /// Authoritative for availability: a blocked day still carries a price
    /// for display purposes.
    pub is_blocked: bool,

    /// Why the day is closed, when [`is_blocked`] is set.
    ///
    /// [`is_blocked`]: DailyPricing::is_blocked
    pub block_reason: Option<BlockReason>,

    /// [`Channel`]s allowed to book this day, when restricted.
    ///
    /// Consumed by booking validation; has no effect on the price.
    pub restricted_channels: Vec<Channel>,
}

/// Price-affecting adjustment applied to a day.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Adjustment {
    /// Name of the rule the adjustment came from.
    pub rule_name: rule::Name,

    /// Applied percentage.
    pub percent: Percent,
}
