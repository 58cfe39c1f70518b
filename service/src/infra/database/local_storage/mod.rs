//! [`LocalStorage`] [`Database`] implementation.

mod impls;
pub mod key_value;

use std::io;

use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{Reservation, Tier},
    infra::database,
};
#[cfg(doc)]
use crate::infra::Database;

pub use self::key_value::{File, KeyValue, Memory};

/// Key the [`Reservation`]s list is stored under.
pub const RESERVATIONS_KEY: &str = "ejeepReservations";

/// Key the subscription [`Tier`] is stored under.
pub const SUBSCRIPTION_KEY: &str = "ejeepSubscription";

/// [`Database`] keeping everything in a string [`KeyValue`] store.
///
/// Reads never fail: missing or corrupted values are treated as empty ones.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage<Kv = Memory>(Kv);

impl<Kv> LocalStorage<Kv> {
    /// Creates a new [`LocalStorage`] on top of the provided [`KeyValue`]
    /// store.
    #[must_use]
    pub fn new(store: Kv) -> Self {
        Self(store)
    }

    /// Returns the underlying [`KeyValue`] store.
    #[must_use]
    pub fn store(&self) -> &Kv {
        &self.0
    }
}

impl<Kv: KeyValue> LocalStorage<Kv> {
    /// Loads all the stored [`Reservation`]s, in the order of their creation.
    #[must_use]
    pub fn load_reservations(&self) -> Vec<Reservation> {
        let raw = match self.0.get(RESERVATIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("failed to read `{RESERVATIONS_KEY}`: {e}");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("`{RESERVATIONS_KEY}` is corrupted, ignoring it: {e}");
            Vec::new()
        })
    }

    /// Overwrites the stored [`Reservation`]s with the provided ones.
    ///
    /// # Errors
    ///
    /// If the underlying [`KeyValue`] store fails to write.
    pub fn save_reservations(
        &self,
        reservations: &[Reservation],
    ) -> Result<(), Traced<database::Error>> {
        let json = serde_json::to_string(reservations)
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        self.0
            .set(RESERVATIONS_KEY, json)
            .map_err(tracerr::map_from_and_wrap!())
    }

    /// Loads the stored subscription [`Tier`], defaulting to
    /// [`Tier::Free`].
    #[must_use]
    pub fn load_subscription(&self) -> Tier {
        let raw = self.0.get(SUBSCRIPTION_KEY).unwrap_or_else(|e| {
            log::warn!("failed to read `{SUBSCRIPTION_KEY}`: {e}");
            None
        });
        Tier::from_stored(raw.as_deref())
    }

    /// Overwrites the stored subscription [`Tier`].
    ///
    /// # Errors
    ///
    /// If the underlying [`KeyValue`] store fails to write.
    pub fn save_subscription(
        &self,
        tier: Tier,
    ) -> Result<(), Traced<database::Error>> {
        self.0
            .set(SUBSCRIPTION_KEY, tier.to_string())
            .map_err(tracerr::map_from_and_wrap!())
    }
}

/// [`LocalStorage`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// I/O error of the underlying [`KeyValue`] store.
    #[display("I/O failed: {_0}")]
    Io(io::Error),

    /// Stored data cannot be (de)serialized.
    #[display("JSON (de)serialization failed: {_0}")]
    Json(serde_json::Error),
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::domain::{
        reservation::{
            ContactNumber, FullName, Notes, Seats, TravelDate, TravelTime,
        },
        route::Line,
        Reservation, Route, Tier,
    };

    use super::{
        KeyValue as _, LocalStorage, Memory, RESERVATIONS_KEY,
        SUBSCRIPTION_KEY,
    };

    fn reservation(id: &str, line: Line, seats: u8) -> Reservation {
        Reservation {
            id: id.into(),
            full_name: FullName::new("Maria Santos").unwrap(),
            contact_number: ContactNumber::new("0912345678").unwrap(),
            travel_date: TravelDate::parse("2031-01-15").unwrap(),
            travel_time: TravelTime::new("17:45").unwrap(),
            route: Route::Line(line),
            seats: Seats::new(seats).unwrap(),
            notes: Notes::new("with luggage"),
            total_fare: (line.base_fare() * u32::from(seats))
                .discounted(Tier::Premium.discount())
                .round_to_cents(),
        }
    }

    #[test]
    fn reservations_round_trip() {
        let storage = LocalStorage::<Memory>::default();
        let list = vec![
            reservation("a", Line::University, 1),
            reservation("b", Line::Suburb, 7),
            Reservation {
                route: Route::Unknown("airport".into()),
                total_fare: Money::ZERO,
                notes: Notes::default(),
                ..reservation("c", Line::CityCenter, 10)
            },
        ];

        storage.save_reservations(&list).unwrap();

        assert_eq!(storage.load_reservations(), list);
    }

    #[test]
    fn empty_list_round_trips() {
        let storage = LocalStorage::<Memory>::default();

        storage.save_reservations(&[]).unwrap();

        assert_eq!(storage.store().get(RESERVATIONS_KEY).unwrap().unwrap(), "[]");
        assert!(storage.load_reservations().is_empty());
    }

    #[test]
    fn missing_reservations_are_empty() {
        assert!(LocalStorage::<Memory>::default().load_reservations().is_empty());
    }

    #[test]
    fn corrupted_reservations_are_empty() {
        for garbage in ["not json", "{\"id\": 1}", "[{\"id\": \"x\"}]", ""] {
            let storage = LocalStorage::<Memory>::default();
            storage
                .store()
                .set(RESERVATIONS_KEY, garbage.into())
                .unwrap();

            assert!(storage.load_reservations().is_empty(), "`{garbage}`");
        }
    }

    #[test]
    fn subscription_defaults_to_free() {
        let storage = LocalStorage::<Memory>::default();

        assert_eq!(storage.load_subscription(), Tier::Free);

        storage
            .store()
            .set(SUBSCRIPTION_KEY, "platinum".into())
            .unwrap();

        assert_eq!(storage.load_subscription(), Tier::Free);
    }

    #[test]
    fn subscription_round_trip() {
        let storage = LocalStorage::<Memory>::default();

        storage.save_subscription(Tier::Premium).unwrap();

        assert_eq!(
            storage.store().get(SUBSCRIPTION_KEY).unwrap().as_deref(),
            Some("premium"),
        );
        assert_eq!(storage.load_subscription(), Tier::Premium);

        storage.save_subscription(Tier::Free).unwrap();

        assert_eq!(storage.load_subscription(), Tier::Free);
    }
}
