//! [`Booking`] definitions.

use common::{define_kind, Day, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::property;

/// Guest booking occupying a property over a range of nights.
#[derive(Clone, Debug)]
pub struct Booking {
    /// ID of this [`Booking`].
    pub id: Id,

    /// ID of the booked [`Property`].
    ///
    /// [`Property`]: crate::domain::Property
    pub property_id: property::Id,

    /// Arrival [`Day`] of this [`Booking`]: the first paid night.
    pub check_in: Day,

    /// Departure [`Day`] of this [`Booking`], exclusive: the guest leaves
    /// this day and it is not a paid night.
    ///
    /// Well-formed bookings have `check_in < check_out`; the layout engine
    /// tolerates records violating it.
    pub check_out: Day,

    /// [`Channel`] this [`Booking`] came through.
    pub channel: Channel,

    /// Name of the booking guest.
    pub guest: GuestName,

    /// Number of guests staying.
    pub guests_count: GuestsCount,

    /// Agreed nightly rate of this [`Booking`].
    pub nightly_rate: Money,

    /// [`Status`] of this [`Booking`].
    pub status: Status,
}

impl Booking {
    /// Returns the number of paid nights of this [`Booking`].
    ///
    /// Zero or negative for malformed records.
    #[must_use]
    pub fn nights(&self) -> i32 {
        self.check_out - self.check_in
    }

    /// Checks whether this [`Booking`] visually occupies the given [`Day`].
    ///
    /// The departure day counts: the check-out half-segment renders in its
    /// cell even though it is not a paid night.
    #[must_use]
    pub fn occupies(&self, day: Day) -> bool {
        self.check_in <= day && day <= self.check_out
    }
}

/// ID of a [`Booking`].
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

/// Name of the guest holding a [`Booking`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct GuestName(String);

impl GuestName {
    /// Creates a new [`GuestName`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`GuestName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`GuestName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl std::str::FromStr for GuestName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `GuestName`")
    }
}

/// Number of guests staying under a [`Booking`].
pub type GuestsCount = u8;

define_kind! {
    #[doc = "Channel a [`Booking`] came through."]
    enum Channel {
        #[doc = "Airbnb."]
        Airbnb = 1,

        #[doc = "Booking.com."]
        BookingCom = 2,

        #[doc = "Vrbo."]
        Vrbo = 3,

        #[doc = "Direct booking."]
        Direct = 4,
    }
}

define_kind! {
    #[doc = "Status of a [`Booking`]."]
    enum Status {
        #[doc = "Confirmed and counted by the calendar."]
        Confirmed = 1,

        #[doc = "Awaiting confirmation."]
        Pending = 2,

        #[doc = "Cancelled; ignored by the calendar."]
        Cancelled = 3,
    }
}

#[cfg(test)]
mod spec {
    use time::macros::date;

    use super::*;

    fn booking() -> Booking {
        Booking {
            id: Id::new(),
            property_id: crate::domain::property::Id::new(),
            check_in: date!(2026 - 01 - 05).into(),
            check_out: date!(2026 - 01 - 08).into(),
            channel: Channel::Airbnb,
            guest: "Anna Keller".parse().unwrap(),
            guests_count: 2,
            nightly_rate: "120EUR".parse().unwrap(),
            status: Status::Confirmed,
        }
    }

    #[test]
    fn counts_paid_nights() {
        assert_eq!(booking().nights(), 3);
    }

    #[test]
    fn occupies_departure_day_visually() {
        let b = booking();
        assert!(b.occupies(date!(2026 - 01 - 05).into()));
        assert!(b.occupies(date!(2026 - 01 - 07).into()));
        assert!(b.occupies(date!(2026 - 01 - 08).into()));
        assert!(!b.occupies(date!(2026 - 01 - 04).into()));
        assert!(!b.occupies(date!(2026 - 01 - 09).into()));
    }
}
