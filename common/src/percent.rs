//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

/// Signed percentage adjustment.
///
/// Negative values are discounts (`-10` is a 10% price cut), positive values
/// are surcharges.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{_0}%")]
pub struct Percent(Decimal);

impl Percent {
    /// A [`Percent`] adjusting nothing.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Percent`] by checking the provided value is not below
    /// `-100` (a price may be adjusted down to zero, never below).
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < -Decimal::ONE_HUNDRED {
            None
        } else {
            #[expect(
                clippy::allow_attributes,
                reason = "TODO: Remove once clippy is fixed"
            )]
            #[allow(unsafe_code, reason = "invariants checked already")]
            Some(unsafe { Self::new_unchecked(val) })
        }
    }

    /// Creates a new [`Percent`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must not be below `-100`.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(val: Decimal) -> Self {
        Self(val)
    }

    /// Returns the raw percentage value of this [`Percent`].
    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Returns the multiplier this [`Percent`] applies to a price:
    /// `1 + percent / 100`.
    #[must_use]
    pub fn factor(self) -> Decimal {
        Decimal::ONE + self.0 / Decimal::ONE_HUNDRED
    }

    /// Multiplies the provided `amount` by this [`Percent`]'s [`factor()`],
    /// without any rounding.
    ///
    /// [`factor()`]: Percent::factor
    #[must_use]
    pub fn apply(self, amount: Decimal) -> Decimal {
        amount * self.factor()
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.strip_suffix('%').unwrap_or(s))
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}
