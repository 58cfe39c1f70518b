//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use service::domain::Tier;

/// Booking desk of the e-jeep shuttle service.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Command`] to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Action requested from the command line.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Books a new reservation.
    Book(Booking),

    /// Lists all the reservations.
    List,

    /// Deletes a reservation.
    Delete {
        /// ID of the reservation to delete.
        id: String,
    },

    /// Selects a subscription plan.
    Plan {
        /// Plan to switch to.
        tier: Tier,
    },

    /// Previews the fare of a trip.
    Fare {
        /// Route code.
        #[arg(long, default_value = "")]
        route: String,

        /// Number of seats.
        #[arg(long, default_value = "")]
        seats: String,
    },
}

/// Booking form filled from the command line.
///
/// Every field is optional here, so that missing ones are reported along with
/// the other invalid ones.
#[derive(Clone, Debug, clap::Args)]
pub struct Booking {
    /// Full name of the rider.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Mobile number, like `09171234567`.
    #[arg(long, default_value = "")]
    pub contact: String,

    /// Travel date, in `YYYY-MM-DD` form.
    #[arg(long, default_value = "")]
    pub date: String,

    /// Travel time, like `07:30`.
    #[arg(long, default_value = "")]
    pub time: String,

    /// Route code: `city-center`, `university`, `business-district` or
    /// `suburb`.
    #[arg(long, default_value = "")]
    pub route: String,

    /// Number of seats, from 1 to 10.
    #[arg(long, default_value = "")]
    pub seats: String,

    /// Free-text notes for the driver.
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl From<Booking> for service::domain::reservation::Form {
    fn from(value: Booking) -> Self {
        let Booking {
            name,
            contact,
            date,
            time,
            route,
            seats,
            notes,
        } = value;

        Self {
            full_name: name,
            contact_number: contact,
            travel_date: date,
            travel_time: time,
            route,
            seats,
            notes,
        }
    }
}
