//! Text rendering of the booking desk.

use std::fmt::Write as _;

use itertools::Itertools as _;
use service::domain::{
    reservation::{
        form::{Errors, Field},
        Id,
    },
    Quote, Reservation, Tier,
};

/// Text shown instead of an empty reservations list.
pub const NO_RESERVATIONS: &str = "No reservations yet.";

/// Badge marking the premium subscription.
pub const PREMIUM_BADGE: &str = "\u{2605} Premium";

/// Renders the seats badge, like `1 seat` or `3 seats`.
#[must_use]
pub fn seats(count: u8) -> String {
    format!("{count} seat{}", if count > 1 { "s" } else { "" })
}

/// Renders a single [`Reservation`] card.
#[must_use]
pub fn card(reservation: &Reservation) -> String {
    let Reservation {
        id,
        full_name,
        contact_number,
        travel_date,
        travel_time,
        route,
        seats: count,
        notes,
        total_fare,
    } = reservation;

    let mut out = format!("{route} [{}]\n", seats(count.get()));
    let mut row = |label: &str, value: &dyn std::fmt::Display| {
        _ = writeln!(out, "  {label:<8} {value}");
    };
    row("Name", full_name);
    row("Contact", contact_number);
    row("Date", travel_date);
    row("Time", travel_time);
    if !notes.is_empty() {
        row("Notes", notes);
    }
    row("Fare", total_fare);
    row("ID", id);
    out
}

/// Renders all the [`Reservation`] cards, in the provided order.
#[must_use]
pub fn reservations(list: &[Reservation], tier: Tier) -> String {
    let mut out = String::new();
    if let Some(badge) = premium_badge(tier) {
        _ = writeln!(out, "{badge}\n");
    }
    if list.is_empty() {
        out.push_str(NO_RESERVATIONS);
    } else {
        out.push_str(list.iter().map(card).join("\n").trim_end());
    }
    out
}

/// Renders the fare preview of a [`Quote`].
///
/// Savings are shown only when a discount actually applies.
#[must_use]
pub fn fare_preview(quote: &Quote) -> String {
    if quote.is_discounted() {
        format!(
            "{} (You save {}, {}% off)",
            quote.total,
            quote.saved(),
            quote.discount,
        )
    } else {
        quote.total.to_string()
    }
}

/// Renders the confirmation of a just recorded [`Reservation`].
#[must_use]
pub fn confirmation(reservation: &Reservation) -> String {
    format!(
        "Your reservation for {} on {} at {} has been recorded.",
        seats(reservation.seats.get()),
        reservation.travel_date,
        reservation.travel_time,
    )
}

/// Renders the outcome of deleting the [`Reservation`] with the provided
/// [`Id`].
#[must_use]
pub fn deleted(id: &Id, deleted: Option<&Reservation>) -> String {
    match deleted {
        Some(r) => format!("Deleted reservation `{id}` ({}).", r.route),
        None => format!("No reservation `{id}` to delete."),
    }
}

/// Renders the confirmation of switching to the provided [`Tier`].
#[must_use]
pub fn plan_selected(tier: Tier) -> String {
    match tier {
        Tier::Free => {
            "You are now on the Free Plan. Enjoy basic reservation access!"
                .to_owned()
        }
        Tier::Premium => format!(
            "Welcome to Premium! You now have unlimited bookings and \
             discounted fares ({}% off).",
            tier.discount(),
        ),
    }
}

/// Returns the badge to show for the provided [`Tier`], if any.
#[must_use]
pub fn premium_badge(tier: Tier) -> Option<&'static str> {
    tier.is_premium().then_some(PREMIUM_BADGE)
}

/// Renders the messages of the invalid booking [`Field`]s, one per line.
#[must_use]
pub fn field_errors(errors: &Errors) -> String {
    errors
        .iter()
        .format_with("\n", |(field, message), f| {
            f(&format_args!("  --{}: {message}", flag(field)))
        })
        .to_string()
}

/// Returns the command line flag a [`Field`] is entered with.
fn flag(field: Field) -> &'static str {
    match field {
        Field::FullName => "name",
        Field::ContactNumber => "contact",
        Field::TravelDate => "date",
        Field::TravelTime => "time",
        Field::Route => "route",
        Field::Seats => "seats",
    }
}
