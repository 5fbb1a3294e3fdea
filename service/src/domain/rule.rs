//! [`PricingRule`] definitions.

use common::{define_kind, Day, DaySpan, Percent};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{blocked::BlockReason, booking::Channel, property};

/// Configurable rule shaping the price, stay constraints or availability of
/// property calendar days.
///
/// Rules never expire on their own: a rule whose [`DaySpan`] has passed stays
/// in the rule set and simply never matches future days.
#[derive(Clone, Debug)]
pub struct PricingRule {
    /// ID of this [`PricingRule`].
    pub id: Id,

    /// Human-readable [`Name`] of this [`PricingRule`].
    pub name: Name,

    /// [`Scope`] of properties this [`PricingRule`] covers.
    pub scope: Scope,

    /// Whether this [`PricingRule`] participates in matching.
    pub enabled: bool,

    /// [`Priority`] of this [`PricingRule`]: higher wins on conflicts, and
    /// ties go to the most recently created rule.
    pub priority: Priority,

    /// Inclusive range of days this [`PricingRule`] applies to.
    pub span: DaySpan,

    /// Type-specific payload of this [`PricingRule`].
    pub action: Action,
}

impl PricingRule {
    /// Returns [`Kind`] of this [`PricingRule`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self.action {
            Action::MinStay { .. } => Kind::MinStay,
            Action::MaxStay { .. } => Kind::MaxStay,
            Action::ClosingBlock { .. } => Kind::ClosingBlock,
            Action::ChannelRestriction { .. } => Kind::ChannelRestriction,
            Action::Promotion { .. } => Kind::Promotion,
            Action::PriceOverride { .. } => Kind::PriceOverride,
        }
    }

    /// Checks whether this [`PricingRule`] covers the given [`Property`] on
    /// the given [`Day`].
    ///
    /// [`Property`]: crate::domain::Property
    #[must_use]
    pub fn applies_to(&self, property_id: property::Id, day: Day) -> bool {
        self.enabled && self.span.contains(day) && self.scope.covers(property_id)
    }
}

/// Type-specific payload of a [`PricingRule`].
///
/// A sum type keyed by [`Kind`], so a rule missing its required payload is
/// unrepresentable.
#[derive(Clone, Debug)]
pub enum Action {
    /// Requires stays touching the day to last at least [`NumNights`].
    MinStay {
        /// Minimum number of nights.
        nights: NumNights,
    },

    /// Caps stays touching the day at [`NumNights`].
    MaxStay {
        /// Maximum number of nights.
        nights: NumNights,
    },

    /// Closes the day for booking entirely.
    ClosingBlock {
        /// Why the day is closed.
        reason: BlockReason,
    },

    /// Limits which booking [`Channel`]s may book the day.
    ChannelRestriction {
        /// [`Channel`]s allowed to book.
        channels: Vec<Channel>,
    },

    /// Discounts (or surcharges) the running price multiplicatively;
    /// multiple promotions compound.
    Promotion {
        /// Kind of this promotion.
        kind: PromotionKind,

        /// Percentage applied to the running price.
        adjustment: Percent,
    },

    /// Replaces the price with `base * (1 + adjustment / 100)` outright;
    /// never compounds with other price adjustments.
    PriceOverride {
        /// Percentage applied to the base price.
        adjustment: Percent,
    },
}

define_kind! {
    #[doc = "Kind of a [`PricingRule`], keying its [`Action`] payload."]
    enum Kind {
        #[doc = "[`Action::MinStay`] rule."]
        MinStay = 1,

        #[doc = "[`Action::MaxStay`] rule."]
        MaxStay = 2,

        #[doc = "[`Action::ClosingBlock`] rule."]
        ClosingBlock = 3,

        #[doc = "[`Action::ChannelRestriction`] rule."]
        ChannelRestriction = 4,

        #[doc = "[`Action::Promotion`] rule."]
        Promotion = 5,

        #[doc = "[`Action::PriceOverride`] rule."]
        PriceOverride = 6,
    }
}

define_kind! {
    #[doc = "Kind of an [`Action::Promotion`]."]
    enum PromotionKind {
        #[doc = "Discount for booking long in advance."]
        EarlyBird = 1,

        #[doc = "Discount for filling a near-term gap."]
        LastMinute = 2,

        #[doc = "Discount for long stays."]
        LongStay = 3,

        #[doc = "Seasonal campaign."]
        Seasonal = 4,
    }
}

/// Scope of properties a [`PricingRule`] covers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scope {
    /// The rule covers every property.
    AllProperties,

    /// The rule covers a single property.
    Property(property::Id),
}

impl Scope {
    /// Checks whether this [`Scope`] covers the given [`property::Id`].
    #[must_use]
    pub fn covers(self, property_id: property::Id) -> bool {
        match self {
            Self::AllProperties => true,
            Self::Property(id) => id == property_id,
        }
    }
}

/// ID of a [`PricingRule`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Name of a [`PricingRule`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl std::str::FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Priority of a [`PricingRule`].
///
/// Higher values win when rules conflict on the same day.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Priority(i32);

/// Number of nights constrained by a stay rule.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Into, PartialEq)]
pub struct NumNights(u16);

impl NumNights {
    /// The shortest possible stay: a single night.
    pub const MIN: Self = Self(1);

    /// Creates a new [`NumNights`] by checking the provided value is at
    /// least `1`.
    #[must_use]
    pub fn new(nights: u16) -> Option<Self> {
        (nights >= 1).then_some(Self(nights))
    }

    /// Returns the raw number of nights.
    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod spec {
    use common::DaySpan;
    use time::macros::date;

    use crate::domain::property;

    use super::{Action, BlockReason, Kind, NumNights, PricingRule, Scope};

    fn rule(scope: Scope, enabled: bool) -> PricingRule {
        PricingRule {
            id: super::Id::new(),
            name: "Spring maintenance".parse().unwrap(),
            scope,
            enabled,
            priority: 10.into(),
            span: DaySpan::new(
                date!(2026 - 03 - 01).into(),
                date!(2026 - 03 - 10).into(),
            )
            .unwrap(),
            action: Action::ClosingBlock {
                reason: BlockReason::Maintenance,
            },
        }
    }

    #[test]
    fn applies_within_span_and_scope() {
        let id = property::Id::new();
        let other = property::Id::new();

        let all = rule(Scope::AllProperties, true);
        assert!(all.applies_to(id, date!(2026 - 03 - 01).into()));
        assert!(all.applies_to(other, date!(2026 - 03 - 10).into()));
        assert!(!all.applies_to(id, date!(2026 - 02 - 28).into()));
        assert!(!all.applies_to(id, date!(2026 - 03 - 11).into()));

        let scoped = rule(Scope::Property(id), true);
        assert!(scoped.applies_to(id, date!(2026 - 03 - 05).into()));
        assert!(!scoped.applies_to(other, date!(2026 - 03 - 05).into()));
    }

    #[test]
    fn disabled_never_applies() {
        let id = property::Id::new();
        let disabled = rule(Scope::AllProperties, false);
        assert!(!disabled.applies_to(id, date!(2026 - 03 - 05).into()));
    }

    #[test]
    fn kind_follows_action() {
        assert_eq!(rule(Scope::AllProperties, true).kind(), Kind::ClosingBlock);
    }

    #[test]
    fn num_nights_requires_at_least_one() {
        assert!(NumNights::new(0).is_none());
        assert_eq!(NumNights::new(1), Some(NumNights::MIN));
        assert!(NumNights::new(14).is_some());
    }
}
