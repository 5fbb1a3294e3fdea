//! Pricing-rule resolution: matching rules to a property day and folding
//! them into a [`DailyPricing`].

use std::cmp;

use common::{Day, Money};
use smart_default::SmartDefault;

use crate::{
    domain::{
        blocked::BlockReason,
        booking::Channel,
        property,
        rule::{Action, NumNights, PricingRule, Priority},
    },
    read::pricing::{Adjustment, DailyPricing},
};

/// Pricing engine configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Minimum stay assumed when no rule constrains it.
    #[default(NumNights::MIN)]
    pub default_min_stay: NumNights,
}

/// Filters the provided `rules` down to the ones covering the `property_id`
/// on the `day`, ordered by descending [`Priority`].
///
/// `rules` must be in creation order: the sort is stable, so rules with
/// equal priority keep that order and results are reproducible across calls.
#[must_use]
pub fn match_rules<'r>(
    rules: &'r [PricingRule],
    property_id: property::Id,
    day: Day,
) -> Vec<&'r PricingRule> {
    let mut matches: Vec<_> = rules
        .iter()
        .filter(|rule| rule.applies_to(property_id, day))
        .collect();
    matches.sort_by_key(|rule| cmp::Reverse(rule.priority));
    matches
}

/// Folds the ordered `matches` of [`match_rules`] into the effective
/// [`DailyPricing`] for the day.
///
/// Folding walks from the highest priority down:
/// - a closing block freezes the price (whatever was folded so far stays,
///   for display) and marks the day blocked;
/// - a price override replaces the running price with
///   `base * (1 + adjustment / 100)` outright and freezes it;
/// - promotions compound multiplicatively onto the running price;
/// - stay bounds and channel restrictions are orthogonal to the price.
///
/// Within one concern, the first priority seen wins, except that a rule of
/// the *same* priority supersedes the one folded before it: equal-priority
/// conflicts go to the most recently created rule.
///
/// Fails soft on a non-chargeable `base_price`: the price passes through
/// unchanged with no adjustments recorded, and the function never panics,
/// since its output feeds the grid directly.
#[must_use]
pub fn resolve(
    config: Config,
    base_price: Money,
    matches: &[&PricingRule],
) -> DailyPricing {
    let chargeable = base_price.is_chargeable();
    let mut price = base_price.amount;
    let mut adjustments = Vec::new();
    let mut min_stay: Option<(Priority, NumNights)> = None;
    let mut max_stay: Option<(Priority, NumNights)> = None;
    let mut block: Option<(Priority, BlockReason)> = None;
    let mut override_at: Option<Priority> = None;
    let mut restricted: Vec<Channel> = Vec::new();

    for rule in matches {
        match &rule.action {
            Action::ClosingBlock { reason } => {
                if block.is_none_or(|(p, _)| p == rule.priority) {
                    block = Some((rule.priority, *reason));
                }
            }
            Action::PriceOverride { adjustment } => {
                if chargeable
                    && block.is_none()
                    && override_at.is_none_or(|p| p == rule.priority)
                {
                    price = adjustment.apply(base_price.amount);
                    adjustments.clear();
                    adjustments.push(Adjustment {
                        rule_name: rule.name.clone(),
                        percent: *adjustment,
                    });
                    override_at = Some(rule.priority);
                }
            }
            Action::Promotion { adjustment, .. } => {
                if chargeable && block.is_none() && override_at.is_none() {
                    price = adjustment.apply(price);
                    adjustments.push(Adjustment {
                        rule_name: rule.name.clone(),
                        percent: *adjustment,
                    });
                }
            }
            Action::MinStay { nights } => {
                if min_stay.is_none_or(|(p, _)| p == rule.priority) {
                    min_stay = Some((rule.priority, *nights));
                }
            }
            Action::MaxStay { nights } => {
                if max_stay.is_none_or(|(p, _)| p == rule.priority) {
                    max_stay = Some((rule.priority, *nights));
                }
            }
            Action::ChannelRestriction { channels } => {
                for channel in channels {
                    if !restricted.contains(channel) {
                        restricted.push(*channel);
                    }
                }
            }
        }
    }

    let final_price = if chargeable {
        Money {
            amount: price,
            currency: base_price.currency,
        }
        .rounded()
    } else {
        base_price
    };

    DailyPricing {
        base_price,
        adjustments,
        final_price,
        min_stay: min_stay.map_or(config.default_min_stay, |(_, n)| n),
        max_stay: max_stay.map(|(_, n)| n),
        is_blocked: block.is_some(),
        block_reason: block.map(|(_, reason)| reason),
        restricted_channels: restricted,
    }
}
