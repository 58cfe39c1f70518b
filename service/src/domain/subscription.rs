//! Subscription [`Tier`] definitions.

use common::{define_kind, Percent};

/// Discount granted to the [`Tier::Premium`] subscribers.
const PREMIUM_DISCOUNT: Percent = match Percent::from_tenths(75) {
    Some(p) => p,
    None => panic!("`7.5%` is a valid `Percent`"),
};

define_kind! {
    #[doc = "Subscription tier of the rider."]
    enum Tier {
        #[doc = "Basic reservation access."]
        Free,

        #[doc = "Discounted fares."]
        Premium,
    }
}

impl Tier {
    /// Parses a stored [`Tier`] value.
    ///
    /// Anything but a recognized tier falls back to [`Tier::Free`].
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    /// Returns the fare discount granted by this [`Tier`].
    #[must_use]
    pub const fn discount(self) -> Percent {
        match self {
            Self::Free => Percent::ZERO,
            Self::Premium => PREMIUM_DISCOUNT,
        }
    }

    /// Indicates whether this is the [`Tier::Premium`].
    #[must_use]
    pub const fn is_premium(self) -> bool {
        matches!(self, Self::Premium)
    }
}

impl Default for Tier {
    fn default() -> Self {
        Self::Free
    }
}
