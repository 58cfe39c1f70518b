//! [`Money`]-related definitions.

use std::{fmt, ops};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::Percent;

/// Amount of money in Philippine pesos.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Sign of the peso currency.
    pub const SIGN: &'static str = "\u{20b1}";

    /// Creates a new [`Money`] of the provided `amount`.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a new [`Money`] of a whole number of pesos.
    #[must_use]
    pub const fn pesos(amount: u32) -> Self {
        Self(Decimal::from_parts(amount, 0, 0, false, 0))
    }

    /// Returns the amount of this [`Money`].
    #[must_use]
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Rounds this [`Money`] to whole cents, with midpoints rounded away
    /// from zero.
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Takes the provided [`Percent`] off this [`Money`].
    ///
    /// The result is not rounded.
    #[must_use]
    pub fn discounted(self, discount: Percent) -> Self {
        if discount.is_zero() {
            return self;
        }
        Self(self.0 * discount.remainder())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut amount = self.round_to_cents().0;
        amount.rescale(2);
        write!(f, "{}{amount}", Self::SIGN)
    }
}

impl ops::Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl ops::Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.
    //!
    //! [`Money`] is represented as a plain JSON number with cent precision.

    use rust_decimal::{prelude::ToPrimitive as _, Decimal};
    use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

    use super::Money;

    impl Serialize for Money {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let amount = self.round_to_cents().0.to_f64().ok_or_else(|| {
                <S::Error as ser::Error>::custom(format!(
                    "`{}` overflows `f64`",
                    self.0,
                ))
            })?;
            serializer.serialize_f64(amount)
        }
    }

    impl<'de> Deserialize<'de> for Money {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let amount = f64::deserialize(deserializer)?;
            Decimal::try_from(amount)
                .map(|d| Money(d).round_to_cents())
                .map_err(|e| {
                    <D::Error as de::Error>::custom(format!(
                        "invalid amount `{amount}`: {e}",
                    ))
                })
        }
    }
}
