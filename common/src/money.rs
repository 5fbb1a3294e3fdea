//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] amount.
    #[must_use]
    pub fn new(amount: impl Into<Decimal>, currency: Currency) -> Self {
        Self {
            amount: amount.into(),
            currency,
        }
    }

    /// Checks whether this [`Money`] is a usable price: a strictly positive
    /// amount.
    ///
    /// A zero or negative amount means the price is absent or malformed, and
    /// price computations fail soft on it.
    #[must_use]
    pub fn is_chargeable(self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns this [`Money`] with its amount rounded to 2 decimal places.
    ///
    /// Applied to final prices only, never to intermediate multipliers.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            amount: self.amount.round_dp(2),
            currency: self.currency,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        write!(f, "{}{currency}", amount.normalize())
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s.len().checked_sub(3).ok_or("too short")?;
        let (amount, currency) = s.split_at(split);
        Ok(Self {
            amount: Decimal::from_str(amount).map_err(|_| "invalid amount")?,
            currency: Currency::from_str(currency)
                .map_err(|_| "invalid currency")?,
        })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "US Dollar."]
        Usd = 1,

        #[doc = "Euro."]
        Eur = 2,

        #[doc = "Pound Sterling."]
        Gbp = 3,
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("123.45EUR").unwrap(),
            Money::new(decimal("123.45"), Currency::Eur),
        );
        assert_eq!(
            Money::from_str("99USD").unwrap(),
            Money::new(decimal("99"), Currency::Usd),
        );

        assert!(Money::from_str("123.45").is_err());
        assert!(Money::from_str("EU").is_err());
        assert!(Money::from_str("123.45Euros").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(
            Money::new(decimal("123.45"), Currency::Eur).to_string(),
            "123.45EUR",
        );
        assert_eq!(
            Money::new(decimal("120.00"), Currency::Gbp).to_string(),
            "120GBP",
        );
    }

    #[test]
    fn chargeability() {
        assert!(Money::new(decimal("0.01"), Currency::Eur).is_chargeable());
        assert!(!Money::new(Decimal::ZERO, Currency::Eur).is_chargeable());
        assert!(!Money::new(decimal("-5"), Currency::Eur).is_chargeable());
    }

    #[test]
    fn rounds_final_amounts_only() {
        assert_eq!(
            Money::new(decimal("89.991"), Currency::Eur).rounded(),
            Money::new(decimal("89.99"), Currency::Eur),
        );
        assert_eq!(
            Money::new(decimal("81"), Currency::Eur).rounded(),
            Money::new(decimal("81"), Currency::Eur),
        );
    }
}
