//! Fare pricing.

use common::{Money, Percent};

use crate::domain::{Route, Tier};

/// Returns the per-seat fare of the provided [`Route`].
#[must_use]
pub fn base_fare(route: &Route) -> Money {
    route.base_fare()
}

/// Returns the discount the provided [`Tier`] is entitled to.
#[must_use]
pub const fn discount(tier: Tier) -> Percent {
    tier.discount()
}

/// Computes the total fare of `seats` on the provided [`Route`] for a rider
/// of the provided [`Tier`], rounded to cents.
#[must_use]
pub fn compute(route: &Route, seats: u32, tier: Tier) -> Money {
    (base_fare(route) * seats)
        .discounted(discount(tier))
        .round_to_cents()
}

/// Fare preview, detailing the discount.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Total before the discount.
    pub undiscounted: Money,

    /// Discount applied to the [`Quote::undiscounted`] total.
    pub discount: Percent,

    /// Total to be paid.
    pub total: Money,
}

impl Quote {
    /// Quotes `seats` on the provided [`Route`] for the provided [`Tier`].
    #[must_use]
    pub fn new(route: &Route, seats: u32, tier: Tier) -> Self {
        Self {
            undiscounted: (base_fare(route) * seats).round_to_cents(),
            discount: discount(tier),
            total: compute(route, seats, tier),
        }
    }

    /// Returns the amount saved thanks to the discount.
    ///
    /// Always adds up with [`Quote::total`] to [`Quote::undiscounted`].
    #[must_use]
    pub fn saved(&self) -> Money {
        self.undiscounted - self.total
    }

    /// Indicates whether any discount is applied to this [`Quote`].
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        !self.discount.is_zero() && self.total > Money::ZERO
    }
}
