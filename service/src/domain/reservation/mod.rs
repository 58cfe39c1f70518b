//! [`Reservation`] definitions.

pub mod form;

use std::sync::LazyLock;

use common::{unit, DateOf, Money};
use derive_more::{AsRef, Display, From, Into};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Route;

pub use self::form::{Errors, Field, Form, Violation};

/// Booking of seats on a shuttle [`Route`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// ID of this [`Reservation`].
    pub id: Id,

    /// [`FullName`] of the rider.
    pub full_name: FullName,

    /// [`ContactNumber`] of the rider.
    pub contact_number: ContactNumber,

    /// [`TravelDate`] of this [`Reservation`].
    pub travel_date: TravelDate,

    /// [`TravelTime`] of this [`Reservation`].
    pub travel_time: TravelTime,

    /// [`Route`] to travel.
    pub route: Route,

    /// Number of [`Seats`] booked.
    pub seats: Seats,

    /// Free-text [`Notes`] of the rider.
    pub notes: Notes,

    /// Total fare, fixed at the moment of booking.
    pub total_fare: Money,
}

impl Reservation {
    /// Creates a new [`Reservation`] out of the provided [`Draft`].
    #[must_use]
    pub fn new(id: Id, draft: Draft) -> Self {
        let Draft {
            full_name,
            contact_number,
            travel_date,
            travel_time,
            route,
            seats,
            notes,
            total_fare,
        } = draft;

        Self {
            id,
            full_name,
            contact_number,
            travel_date,
            travel_time,
            route,
            seats,
            notes,
            total_fare,
        }
    }
}

/// Validated [`Reservation`] not persisted yet.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Draft {
    /// [`FullName`] of the rider.
    pub full_name: FullName,

    /// [`ContactNumber`] of the rider.
    pub contact_number: ContactNumber,

    /// [`TravelDate`] of the [`Reservation`].
    pub travel_date: TravelDate,

    /// [`TravelTime`] of the [`Reservation`].
    pub travel_time: TravelTime,

    /// [`Route`] to travel.
    pub route: Route,

    /// Number of [`Seats`] to book.
    pub seats: Seats,

    /// Free-text [`Notes`] of the rider.
    pub notes: Notes,

    /// Total fare computed at validation.
    pub total_fare: Money,
}

/// ID of a [`Reservation`].
///
/// Opaque for any purpose other than equality.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(str)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Full name of a rider.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, Into, PartialEq, Serialize)]
#[as_ref(str)]
#[serde(try_from = "String", into = "String")]
pub struct FullName(String);

impl FullName {
    /// Creates a new [`FullName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`FullName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty()
    }
}

impl TryFrom<String> for FullName {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `FullName`")
    }
}

/// Local mobile number of a rider.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, Into, PartialEq, Serialize)]
#[as_ref(str)]
#[serde(try_from = "String", into = "String")]
pub struct ContactNumber(String);

impl ContactNumber {
    /// Creates a new [`ContactNumber`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`ContactNumber`].
    fn check(number: impl AsRef<str>) -> bool {
        /// Leading `0` followed by 9 or 10 digits, as in `09171234567`.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^0[0-9]{9,10}$").expect("valid regex")
        });

        REGEX.is_match(number.as_ref())
    }
}

impl TryFrom<String> for ContactNumber {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `ContactNumber`")
    }
}

/// Calendar day a [`Reservation`] travels on.
pub type TravelDate = DateOf<(Reservation, unit::Travel)>;

/// Time of day a [`Reservation`] travels at, as entered by the rider.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, Into, PartialEq, Serialize)]
#[as_ref(str)]
#[serde(try_from = "String", into = "String")]
pub struct TravelTime(String);

impl TravelTime {
    /// Creates a new [`TravelTime`] if the given `time` is not blank.
    #[must_use]
    pub fn new(time: impl Into<String>) -> Option<Self> {
        let time = time.into();
        (!time.trim().is_empty()).then_some(Self(time))
    }
}

impl TryFrom<String> for TravelTime {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `TravelTime`")
    }
}

/// Number of seats booked by a [`Reservation`].
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Into, PartialEq, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Seats(u8);

impl Seats {
    /// Minimal number of [`Seats`] to book.
    pub const MIN: u8 = 1;

    /// Maximal number of [`Seats`] to book.
    pub const MAX: u8 = 10;

    /// Creates new [`Seats`] if the given `count` is within
    /// [`Seats::MIN`]..=[`Seats::MAX`].
    #[must_use]
    pub fn new(count: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&count)
            .then_some(Self(count))
    }

    /// Returns the number of seats.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Seats {
    type Error = &'static str;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Self::new(count).ok_or("invalid `Seats`")
    }
}

/// Free-text notes attached to a [`Reservation`], trimmed.
#[derive(
    AsRef,
    Clone,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(str)]
#[serde(from = "String", into = "String")]
pub struct Notes(String);

impl Notes {
    /// Creates new [`Notes`] out of the given `text`, trimming it.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().trim().to_owned())
    }

    /// Indicates whether these [`Notes`] are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Notes {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::domain::{route::Line, Route};

    use super::{
        ContactNumber, FullName, Id, Notes, Reservation, Seats, TravelDate,
        TravelTime,
    };

    fn reservation(id: &str, notes: &str) -> Reservation {
        Reservation {
            id: id.into(),
            full_name: FullName::new("Juan Dela Cruz").unwrap(),
            contact_number: ContactNumber::new("09171234567").unwrap(),
            travel_date: TravelDate::parse("2030-06-01").unwrap(),
            travel_time: TravelTime::new("08:30").unwrap(),
            route: Route::Line(Line::CityCenter),
            seats: Seats::new(2).unwrap(),
            notes: Notes::new(notes),
            total_fare: Money::pesos(40),
        }
    }

    #[test]
    fn contact_number_format() {
        assert!(ContactNumber::new("091234567").is_none());
        assert!(ContactNumber::new("0912345678").is_some());
        assert!(ContactNumber::new("09123456789").is_some());
        assert!(ContactNumber::new("091234567890").is_none());
        assert!(ContactNumber::new("12345").is_none());
        assert!(ContactNumber::new("19123456789").is_none());
        assert!(ContactNumber::new("0912-345-678").is_none());
        assert!(ContactNumber::new("").is_none());
    }

    #[test]
    fn seats_range() {
        assert!(Seats::new(0).is_none());
        assert_eq!(Seats::new(1).map(Seats::get), Some(1));
        assert_eq!(Seats::new(10).map(Seats::get), Some(10));
        assert!(Seats::new(11).is_none());
    }

    #[test]
    fn full_name_is_trimmed_and_non_empty() {
        assert!(FullName::new("Maria").is_some());
        assert!(FullName::new(" Maria").is_none());
        assert!(FullName::new("").is_none());
    }

    #[test]
    fn notes_are_trimmed() {
        assert_eq!(Notes::new("  window seat ").as_ref(), "window seat");
        assert!(Notes::new("   ").is_empty());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(Id::new(), Id::new());
    }

    #[test]
    fn stored_layout() {
        let json = serde_json::to_value(reservation("1718000000000", "")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "1718000000000",
                "fullName": "Juan Dela Cruz",
                "contactNumber": "09171234567",
                "travelDate": "2030-06-01",
                "travelTime": "08:30",
                "route": "city-center",
                "seats": 2,
                "notes": "",
                "totalFare": 40.0,
            }),
        );
    }

    #[test]
    fn reads_stored_record() {
        let stored = r#"{
            "id": "1718000000000",
            "fullName": "Juan Dela Cruz",
            "contactNumber": "09171234567",
            "travelDate": "2030-06-01",
            "travelTime": "08:30",
            "route": "city-center",
            "seats": 2,
            "notes": "window seat",
            "totalFare": 40
        }"#;

        assert_eq!(
            serde_json::from_str::<Reservation>(stored).unwrap(),
            reservation("1718000000000", "window seat"),
        );
    }

    #[test]
    fn rejects_malformed_record() {
        let stored = r#"{
            "id": "1",
            "fullName": "Juan Dela Cruz",
            "contactNumber": "09171234567",
            "travelDate": "2030-06-01",
            "travelTime": "08:30",
            "route": "city-center",
            "seats": 0,
            "notes": "",
            "totalFare": 0
        }"#;

        assert!(serde_json::from_str::<Reservation>(stored).is_err());
    }
}
