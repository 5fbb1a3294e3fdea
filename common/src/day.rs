//! Calendar day utilities.

use std::{fmt, ops, str::FromStr};

use derive_more::{Display, Error};
use time::{
    format_description::BorrowedFormatItem, macros::format_description,
};

/// Format of a [`Day`] in its textual form.
const FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Normalized calendar day, free of time-of-day and timezone.
///
/// All interval math compares [`Day`]s through their integer [`index()`], so
/// `<`/`<=` are pure integer operations.
///
/// [`index()`]: Day::index
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Day {
    /// Inner representation of the day.
    inner: time::Date,
}

impl Day {
    /// Creates a new [`Day`] representing the current UTC date.
    #[must_use]
    pub fn today() -> Self {
        Self {
            inner: time::OffsetDateTime::now_utc().date(),
        }
    }

    /// Returns the index of this [`Day`]: its number of days since the Julian
    /// epoch.
    #[must_use]
    pub fn index(self) -> i32 {
        self.inner.to_julian_day()
    }

    /// Creates a new [`Day`] from the provided [`index()`].
    ///
    /// [`None`] is returned if the index is out of the supported range.
    ///
    /// [`index()`]: Day::index
    #[must_use]
    pub fn from_index(index: i32) -> Option<Self> {
        time::Date::from_julian_day(index)
            .ok()
            .map(|inner| Self { inner })
    }

    /// Returns the [`Day`] following this one.
    #[must_use]
    pub fn next(self) -> Self {
        self + 1
    }

    /// Returns the day-of-month of this [`Day`].
    #[must_use]
    pub fn day_of_month(self) -> u8 {
        self.inner.day()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl FromStr for Day {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time::Date::parse(s, FORMAT)
            .map(|inner| Self { inner })
            .map_err(ParseError)
    }
}

impl From<time::Date> for Day {
    fn from(inner: time::Date) -> Self {
        Self { inner }
    }
}

impl From<Day> for time::Date {
    fn from(day: Day) -> Self {
        day.inner
    }
}

impl ops::Add<i32> for Day {
    type Output = Self;

    fn add(self, rhs: i32) -> Self::Output {
        Self::from_index(self.index() + rhs).expect("day out of range")
    }
}

impl ops::Sub<i32> for Day {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self::Output {
        Self::from_index(self.index() - rhs).expect("day out of range")
    }
}

impl ops::Sub for Day {
    type Output = i32;

    fn sub(self, rhs: Self) -> Self::Output {
        self.index() - rhs.index()
    }
}

/// Error of parsing a [`Day`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid `Day`: {_0}")]
pub struct ParseError(time::error::Parse);

/// Inclusive range of calendar days.
///
/// A single-day range has `first == last`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DaySpan {
    /// First [`Day`] of this [`DaySpan`].
    first: Day,

    /// Last [`Day`] of this [`DaySpan`].
    last: Day,
}

impl DaySpan {
    /// Creates a new [`DaySpan`] by checking `first` doesn't come after
    /// `last`.
    #[must_use]
    pub fn new(first: Day, last: Day) -> Option<Self> {
        (first <= last).then_some(Self { first, last })
    }

    /// Creates a new [`DaySpan`] between the two [`Day`]s, regardless of
    /// their order.
    #[must_use]
    pub fn between(a: Day, b: Day) -> Self {
        Self {
            first: Day::min(a, b),
            last: Day::max(a, b),
        }
    }

    /// Creates a new single-day [`DaySpan`].
    #[must_use]
    pub fn single(day: Day) -> Self {
        Self {
            first: day,
            last: day,
        }
    }

    /// Returns the first [`Day`] of this [`DaySpan`].
    #[must_use]
    pub fn first(self) -> Day {
        self.first
    }

    /// Returns the last [`Day`] of this [`DaySpan`].
    #[must_use]
    pub fn last(self) -> Day {
        self.last
    }

    /// Returns the [`Day`] just past the end of this [`DaySpan`].
    #[must_use]
    pub fn end_exclusive(self) -> Day {
        self.last + 1
    }

    /// Checks whether the provided [`Day`] falls into this [`DaySpan`].
    ///
    /// Two integer comparisons, no per-day scanning.
    #[must_use]
    pub fn contains(self, day: Day) -> bool {
        self.first <= day && day <= self.last
    }

    /// Returns the number of days in this [`DaySpan`] (at least 1).
    #[must_use]
    pub fn num_days(self) -> i32 {
        (self.last - self.first) + 1
    }

    /// Returns an [`Iterator`] over all the [`Day`]s of this [`DaySpan`].
    pub fn days(self) -> impl Iterator<Item = Day> {
        (self.first.index()..=self.last.index()).filter_map(Day::from_index)
    }
}

impl fmt::Display for DaySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { first, last } = self;
        write!(f, "{first}..={last}")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    use super::Day;

    impl serde::Serialize for Day {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Day {
        fn deserialize<D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Self, D::Error> {
            String::deserialize(deserializer)?
                .parse()
                .map_err(D::Error::custom)
        }
    }
}
