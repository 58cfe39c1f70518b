//! Booking [`Form`] validation.

use std::{
    collections::BTreeMap,
    fmt,
    num::{IntErrorKind, ParseIntError},
};

use common::{Date, DateOf};
use derive_more::Error;
use strum::{Display, EnumString};

use crate::domain::{fare, Route, Tier};

use super::{
    ContactNumber, Draft, FullName, Notes, Seats, TravelDate, TravelTime,
};

/// Raw values of the booking form, exactly as entered.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Form {
    /// Full name of the rider.
    pub full_name: String,

    /// Contact number of the rider.
    pub contact_number: String,

    /// Travel date, in `YYYY-MM-DD` form.
    pub travel_date: String,

    /// Travel time.
    pub travel_time: String,

    /// Route code.
    pub route: String,

    /// Number of seats.
    pub seats: String,

    /// Free-text notes.
    pub notes: String,
}

impl Form {
    /// Validates this [`Form`] into a [`Draft`], pricing it for the provided
    /// [`Tier`].
    ///
    /// `today` is the earliest travel date accepted.
    ///
    /// # Errors
    ///
    /// With the first violated rule of every invalid field.
    pub fn validate(&self, tier: Tier, today: Date) -> Result<Draft, Errors> {
        let mut errors = Errors::default();

        let full_name =
            errors.check(Field::FullName, full_name(&self.full_name));
        let contact_number = errors
            .check(Field::ContactNumber, contact_number(&self.contact_number));
        let travel_date = errors.check(
            Field::TravelDate,
            travel_date(&self.travel_date, today.coerce()),
        );
        let travel_time =
            errors.check(Field::TravelTime, travel_time(&self.travel_time));
        let route = errors.check(Field::Route, route(&self.route));
        let seats = errors.check(Field::Seats, seats(&self.seats));

        let (
            Some(full_name),
            Some(contact_number),
            Some(travel_date),
            Some(travel_time),
            Some(route),
            Some(seats),
        ) = (
            full_name,
            contact_number,
            travel_date,
            travel_time,
            route,
            seats,
        )
        else {
            return Err(errors);
        };

        let total_fare = fare::compute(&route, u32::from(seats.get()), tier);
        Ok(Draft {
            full_name,
            contact_number,
            travel_date,
            travel_time,
            route,
            seats,
            notes: Notes::new(&self.notes),
            total_fare,
        })
    }
}

/// Validates the full name field.
fn full_name(raw: &str) -> Result<FullName, Violation> {
    FullName::new(raw.trim()).ok_or(Violation::Required)
}

/// Validates the contact number field.
fn contact_number(raw: &str) -> Result<ContactNumber, Violation> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Violation::Required);
    }
    ContactNumber::new(raw).ok_or(Violation::Format)
}

/// Validates the travel date field against `today`.
fn travel_date(raw: &str, today: TravelDate) -> Result<TravelDate, Violation> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Violation::Required);
    }
    let date = DateOf::parse(raw).map_err(|_| Violation::Format)?;
    if date < today {
        return Err(Violation::PastDate);
    }
    Ok(date)
}

/// Validates the travel time field.
fn travel_time(raw: &str) -> Result<TravelTime, Violation> {
    TravelTime::new(raw.trim()).ok_or(Violation::Required)
}

/// Validates the route field.
fn route(raw: &str) -> Result<Route, Violation> {
    Route::new(raw.trim()).ok_or(Violation::Required)
}

/// Validates the seats field.
fn seats(raw: &str) -> Result<Seats, Violation> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Violation::Required);
    }
    let count = leading_integer(raw).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Violation::OutOfRange
        }
        _ => Violation::NotANumber,
    })?;
    u8::try_from(count)
        .ok()
        .and_then(Seats::new)
        .ok_or(Violation::OutOfRange)
}

/// Parses the integer `raw` starts with, ignoring everything after its
/// digits, so both `2.5` and `2 seats` give `2`.
///
/// Leading whitespace and a single `+` or `-` sign are allowed.
///
/// # Errors
///
/// If `raw` doesn't start with an integer, or the integer overflows [`i64`].
pub fn leading_integer(raw: &str) -> Result<i64, ParseIntError> {
    let raw = raw.trim_start();
    let sign = usize::from(raw.starts_with(['+', '-']));
    let end = raw[sign..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(raw.len(), |i| sign + i);
    raw[..end].parse()
}

/// Validated field of a [`Form`].
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumString,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    /// [`Form::full_name`].
    FullName,

    /// [`Form::contact_number`].
    ContactNumber,

    /// [`Form::travel_date`].
    TravelDate,

    /// [`Form::travel_time`].
    TravelTime,

    /// [`Form::route`].
    Route,

    /// [`Form::seats`].
    Seats,
}

/// Rule violated by a [`Field`] value.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Violation {
    /// Value is missing.
    Required,

    /// Value is malformed.
    Format,

    /// Date lies before today.
    PastDate,

    /// Value is not an integer.
    NotANumber,

    /// Value is outside of the allowed range.
    OutOfRange,
}

impl Violation {
    /// Returns the message shown next to the provided [`Field`].
    #[must_use]
    pub fn message(self, field: Field) -> &'static str {
        use Field as F;
        use Violation as V;

        match (field, self) {
            (F::FullName, V::Required) => "Name is required.",
            (F::ContactNumber, V::Required) => "Contact number is required.",
            (F::ContactNumber, V::Format) => {
                "Enter a valid PH mobile number (e.g. 09XXXXXXXXX)."
            }
            (F::TravelDate, V::Required) => "Please select a date.",
            (F::TravelDate, V::Format) => "Enter a valid date (YYYY-MM-DD).",
            (F::TravelDate, V::PastDate) => "Date cannot be in the past.",
            (F::TravelTime, V::Required) => "Please select a time.",
            (F::Route, V::Required) => "Please choose a route.",
            (F::Seats, V::Required | V::NotANumber) => {
                "Please enter number of seats."
            }
            (F::Seats, V::OutOfRange) => "Seats must be between 1 and 10.",
            (_, V::Required) => "This field is required.",
            (_, V::Format | V::NotANumber) => "Invalid value.",
            (_, V::PastDate) => "Date cannot be in the past.",
            (_, V::OutOfRange) => "Value is out of range.",
        }
    }
}

/// [`Violation`]s of a [`Form`], at most one per [`Field`].
#[derive(Clone, Debug, Default, Eq, Error, PartialEq)]
pub struct Errors(#[error(not(source))] BTreeMap<Field, Violation>);

impl Errors {
    /// Records the [`Violation`] of the `result`, if any, unless the `field`
    /// has one already.
    fn check<T>(
        &mut self,
        field: Field,
        result: Result<T, Violation>,
    ) -> Option<T> {
        result
            .map_err(|v| {
                _ = self.0.entry(field).or_insert(v);
            })
            .ok()
    }

    /// Returns the [`Violation`] of the provided [`Field`], if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<Violation> {
        self.0.get(&field).copied()
    }

    /// Returns the message of the provided [`Field`], if it's invalid.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|v| v.message(field))
    }

    /// Iterates over the invalid [`Field`]s with their messages, in form
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(&f, &v)| (f, v.message(f)))
    }

    /// Returns the number of invalid [`Field`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether there are no invalid [`Field`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "`{field}`: {message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::{Date, Money};

    use crate::domain::{route::Line, Route, Tier};

    use super::{leading_integer, Field, Form, Violation};

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    fn today() -> Date {
        Date::parse("2030-06-01").unwrap()
    }

    fn form() -> Form {
        Form {
            full_name: "  Juan Dela Cruz ".into(),
            contact_number: "09171234567".into(),
            travel_date: "2030-06-01".into(),
            travel_time: "08:30".into(),
            route: "city-center".into(),
            seats: "2".into(),
            notes: "  window seat  ".into(),
        }
    }

    fn violation(form: &Form, field: Field) -> Option<Violation> {
        form.validate(Tier::Free, today()).err()?.get(field)
    }

    #[test]
    fn normalizes_valid_form() {
        let draft = form().validate(Tier::Free, today()).unwrap();

        assert_eq!(draft.full_name.as_ref(), "Juan Dela Cruz");
        assert_eq!(draft.contact_number.as_ref(), "09171234567");
        assert_eq!(draft.travel_date.to_string(), "2030-06-01");
        assert_eq!(draft.travel_time.as_ref(), "08:30");
        assert_eq!(draft.route, Route::Line(Line::CityCenter));
        assert_eq!(draft.seats.get(), 2);
        assert_eq!(draft.notes.as_ref(), "window seat");
        assert_eq!(draft.total_fare, Money::pesos(40));
    }

    #[test]
    fn prices_with_tier() {
        let draft = form().validate(Tier::Premium, today()).unwrap();

        assert_eq!(draft.total_fare, Money::pesos(37));
    }

    #[test]
    fn collects_errors_across_fields() {
        let errors = Form::default().validate(Tier::Free, today()).unwrap_err();

        assert_eq!(errors.len(), 6);
        assert_eq!(errors.message(Field::FullName), Some("Name is required."));
        assert_eq!(
            errors.message(Field::ContactNumber),
            Some("Contact number is required."),
        );
        assert_eq!(
            errors.message(Field::TravelDate),
            Some("Please select a date."),
        );
        assert_eq!(
            errors.message(Field::TravelTime),
            Some("Please select a time."),
        );
        assert_eq!(errors.message(Field::Route), Some("Please choose a route."));
        assert_eq!(
            errors.message(Field::Seats),
            Some("Please enter number of seats."),
        );
        assert_eq!(
            errors.iter().map(|(f, _)| f.to_string()).collect::<Vec<_>>(),
            [
                "fullName",
                "contactNumber",
                "travelDate",
                "travelTime",
                "route",
                "seats",
            ],
        );
    }

    #[test]
    fn blank_name_is_required() {
        let form = Form {
            full_name: "   ".into(),
            ..form()
        };

        assert_eq!(violation(&form, Field::FullName), Some(Violation::Required));
    }

    #[test]
    fn contact_number() {
        for (number, expected) in [
            ("0912345678", None),
            ("09123456789", None),
            ("091234567", Some(Violation::Format)),
            ("091234567890", Some(Violation::Format)),
            (" 09123456789 ", None),
            ("12345", Some(Violation::Format)),
            ("+639123456789", Some(Violation::Format)),
            ("", Some(Violation::Required)),
            ("  ", Some(Violation::Required)),
        ] {
            let form = Form {
                contact_number: number.into(),
                ..form()
            };

            assert_eq!(
                violation(&form, Field::ContactNumber),
                expected,
                "`{number}`",
            );
        }
    }

    #[test]
    fn travel_date() {
        let yesterday = (today() - DAY).to_string();
        let tomorrow = (today() + DAY).to_string();
        for (date, expected) in [
            (today().to_string(), None),
            (tomorrow, None),
            (yesterday, Some(Violation::PastDate)),
            ("2030-13-01".into(), Some(Violation::Format)),
            (String::new(), Some(Violation::Required)),
        ] {
            let form = Form {
                travel_date: date.clone(),
                ..form()
            };

            assert_eq!(violation(&form, Field::TravelDate), expected, "`{date}`");
        }
    }

    #[test]
    fn seats() {
        for (seats, expected) in [
            ("5", None),
            ("1", None),
            ("10", None),
            ("0", Some(Violation::OutOfRange)),
            ("11", Some(Violation::OutOfRange)),
            ("-3", Some(Violation::OutOfRange)),
            ("99999999999999999999", Some(Violation::OutOfRange)),
            ("two", Some(Violation::NotANumber)),
            ("-", Some(Violation::NotANumber)),
            ("seats: 2", Some(Violation::NotANumber)),
            ("2.5", None),
            ("3 seats", None),
            ("4e0", None),
            ("0.9", Some(Violation::OutOfRange)),
            ("", Some(Violation::Required)),
        ] {
            let form = Form {
                seats: seats.into(),
                ..form()
            };

            assert_eq!(violation(&form, Field::Seats), expected, "`{seats}`");
        }
    }

    #[test]
    fn seats_read_up_to_first_non_digit() {
        let draft = Form {
            seats: " 2.5".into(),
            ..form()
        }
        .validate(Tier::Free, today())
        .unwrap();

        assert_eq!(draft.seats.get(), 2);
        assert_eq!(draft.total_fare, Money::pesos(40));
    }

    #[test]
    fn leading_integers() {
        assert_eq!(leading_integer("42"), Ok(42));
        assert_eq!(leading_integer("  7 seats"), Ok(7));
        assert_eq!(leading_integer("-3.9"), Ok(-3));
        assert_eq!(leading_integer("+10x"), Ok(10));
        assert!(leading_integer("").is_err());
        assert!(leading_integer("x1").is_err());
        assert!(leading_integer("+").is_err());
    }

    #[test]
    fn not_a_number_shares_message_with_required() {
        let form = Form {
            seats: "many".into(),
            ..form()
        };
        let errors = form.validate(Tier::Free, today()).unwrap_err();

        assert_eq!(errors.get(Field::Seats), Some(Violation::NotANumber));
        assert_eq!(
            errors.message(Field::Seats),
            Some("Please enter number of seats."),
        );
    }

    #[test]
    fn time_and_route_are_required() {
        let form = Form {
            travel_time: " ".into(),
            route: String::new(),
            ..form()
        };
        let errors = form.validate(Tier::Free, today()).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::TravelTime), Some(Violation::Required));
        assert_eq!(errors.get(Field::Route), Some(Violation::Required));
    }

    #[test]
    fn unknown_route_is_accepted_at_zero_fare() {
        let form = Form {
            route: "airport".into(),
            ..form()
        };
        let draft = form.validate(Tier::Premium, today()).unwrap();

        assert_eq!(draft.route, Route::Unknown("airport".into()));
        assert_eq!(draft.total_fare, Money::ZERO);
    }

    #[test]
    fn displays_all_messages() {
        let form = Form {
            full_name: String::new(),
            seats: "0".into(),
            ..form()
        };
        let errors = form.validate(Tier::Free, today()).unwrap_err();

        assert_eq!(
            errors.to_string(),
            "`fullName`: Name is required. \
             `seats`: Seats must be between 1 and 10.",
        );
    }
}
