//! [`BlockedPeriod`] definitions.

use common::{define_kind, Day, DaySpan};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::property;

/// Period a property is taken off the market, outside of any booking.
#[derive(Clone, Debug)]
pub struct BlockedPeriod {
    /// ID of this [`BlockedPeriod`].
    pub id: Id,

    /// ID of the blocked [`Property`].
    ///
    /// [`Property`]: crate::domain::Property
    pub property_id: property::Id,

    /// Inclusive range of blocked days; a one-day block has
    /// `first == last`.
    pub span: DaySpan,

    /// Why the property is blocked.
    pub reason: BlockReason,

    /// Cleaning slotted into this [`BlockedPeriod`], if any.
    pub cleaning: Option<CleaningSchedule>,
}

impl BlockedPeriod {
    /// Checks whether this [`BlockedPeriod`] covers the given [`Day`].
    #[must_use]
    pub fn covers(&self, day: Day) -> bool {
        self.span.contains(day)
    }
}

/// Cleaning task scheduled within a [`BlockedPeriod`].
#[derive(Clone, Debug)]
pub struct CleaningSchedule {
    /// [`Day`] the cleaning happens.
    pub day: Day,

    /// Free-form note for the cleaning crew.
    pub note: Option<String>,
}

/// ID of a [`BlockedPeriod`].
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

define_kind! {
    #[doc = "Reason a [`BlockedPeriod`] exists."]
    enum BlockReason {
        #[doc = "Scheduled maintenance."]
        Maintenance = 1,

        #[doc = "The owner stays in the property."]
        OwnerStay = 2,

        #[doc = "Renovation works."]
        Renovation = 3,

        #[doc = "Seasonal closure."]
        Seasonal = 4,
    }
}
