//! [`Percent`]-related definitions.

use derive_more::Display;
use rust_decimal::Decimal;

/// Decimal percentage in the `[0, 100]` range.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Percent(Decimal);

impl Percent {
    /// Zero [`Percent`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Percent`] from the provided tenths of a percent, so
    /// `75` stands for `7.5%`.
    ///
    /// [`None`] is returned if the value exceeds `100%`.
    #[expect(clippy::cast_lossless, reason = "`From` is not `const`")]
    #[must_use]
    pub const fn from_tenths(tenths: u16) -> Option<Self> {
        if tenths > 1000 {
            return None;
        }
        Some(Self(Decimal::from_parts(tenths as u32, 0, 0, false, 1)))
    }

    /// Indicates whether this [`Percent`] is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns the fraction left after taking this [`Percent`] away, so
    /// `7.5%` gives `0.925`.
    #[must_use]
    pub fn remainder(self) -> Decimal {
        (Decimal::ONE_HUNDRED - self.0) / Decimal::ONE_HUNDRED
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::Percent;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_tenths() {
        assert_eq!(Percent::from_tenths(75).unwrap().to_string(), "7.5");
        assert_eq!(Percent::from_tenths(0), Some(Percent::ZERO));
        assert_eq!(Percent::from_tenths(1000).unwrap().to_string(), "100.0");
        assert!(Percent::from_tenths(1001).is_none());
    }

    #[test]
    fn remainder() {
        assert_eq!(
            Percent::from_tenths(75).unwrap().remainder(),
            decimal("0.925"),
        );
        assert_eq!(Percent::ZERO.remainder(), Decimal::ONE);
    }

    #[test]
    fn displays_plain_number() {
        assert_eq!(Percent::from_tenths(75).unwrap().to_string(), "7.5");
    }
}
