//! [`Route`] definitions.

use std::fmt;

use common::{define_kind, Money};
use serde::{Deserialize, Serialize};

define_kind! {
    #[doc = "Shuttle line of the fixed route catalog."]
    enum Line {
        #[doc = "City Center Loop."]
        CityCenter,

        #[doc = "University Route."]
        University,

        #[doc = "Business District."]
        BusinessDistrict,

        #[doc = "Suburb Express."]
        Suburb,
    }
}

impl Line {
    /// Returns the flat per-seat fare of this [`Line`].
    #[must_use]
    pub const fn base_fare(self) -> Money {
        match self {
            Self::CityCenter => Money::pesos(20),
            Self::University => Money::pesos(15),
            Self::BusinessDistrict => Money::pesos(25),
            Self::Suburb => Money::pesos(30),
        }
    }

    /// Returns the human-readable label of this [`Line`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CityCenter => "City Center Loop",
            Self::University => "University Route",
            Self::BusinessDistrict => "Business District",
            Self::Suburb => "Suburb Express",
        }
    }
}

/// Route of a reservation.
///
/// Codes outside of the [`Line`] catalog are carried verbatim: they are
/// labeled with the code itself and cost nothing.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Route {
    /// [`Line`] of the route catalog.
    Line(Line),

    /// Code not present in the route catalog.
    Unknown(String),
}

impl Route {
    /// Creates a new [`Route`] out of the provided non-empty `code`.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        (!code.is_empty()).then(|| Self::from(code))
    }

    /// Returns the code of this [`Route`].
    #[must_use]
    pub fn code(&self) -> String {
        match self {
            Self::Line(line) => line.to_string(),
            Self::Unknown(code) => code.clone(),
        }
    }

    /// Returns the human-readable label of this [`Route`].
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Line(line) => line.label(),
            Self::Unknown(code) => code,
        }
    }

    /// Returns the per-seat fare of this [`Route`].
    #[must_use]
    pub fn base_fare(&self) -> Money {
        match self {
            Self::Line(line) => line.base_fare(),
            Self::Unknown(_) => Money::ZERO,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Route {
    fn from(code: String) -> Self {
        code.parse()
            .map_or_else(|_| Self::Unknown(code), Self::Line)
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.code()
    }
}
