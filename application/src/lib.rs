//! Application provides the command line booking desk on top of the
//! [`Service`].

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod args;
pub mod config;
pub mod error;
pub mod view;

use std::fmt::Write as _;

use service::{
    command::{DeleteReservation, SelectPlan, SubmitReservation},
    domain::reservation,
    query::{self, FarePreview},
    Command as _, Query as _,
};
// Used in binary.
use tokio as _;
use tracing_subscriber as _;

pub use self::{
    args::{Args, Command},
    config::Config,
    error::{AsError, Error},
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<
    service::infra::LocalStorage<service::infra::local_storage::File>,
>;

/// Runs the provided [`Command`], returning the text to show to the user.
///
/// # Errors
///
/// If the [`Command`] fails, including the booking form being invalid.
pub async fn run(service: &Service, command: Command) -> Result<String, Error> {
    match command {
        Command::Book(booking) => {
            let reservation = service
                .execute(SubmitReservation {
                    form: booking.into(),
                })
                .await
                .map_err(AsError::into_error)?;
            Ok(view::confirmation(&reservation))
        }
        Command::List => {
            let list = service
                .execute(query::reservations::List::all())
                .await
                .map_err(AsError::into_error)?;
            let tier = service
                .execute(query::subscription::Current::all())
                .await
                .map_err(AsError::into_error)?;
            Ok(view::reservations(&list, tier))
        }
        Command::Delete { id } => {
            let id = reservation::Id::from(id);
            let deleted = service
                .execute(DeleteReservation { id: id.clone() })
                .await
                .map_err(AsError::into_error)?;
            Ok(view::deleted(&id, deleted.as_ref()))
        }
        Command::Plan { tier } => {
            let mut changes = service.subscribe_plan_changes();
            service
                .execute(SelectPlan { tier })
                .await
                .map_err(AsError::into_error)?;

            let mut out = view::plan_selected(tier);
            while let Ok(changed) = changes.try_recv() {
                if let Some(badge) = view::premium_badge(changed) {
                    _ = write!(out, "\n{badge}");
                }
            }
            Ok(out)
        }
        Command::Fare { route, seats } => {
            let quote = service
                .execute(FarePreview { route, seats })
                .await
                .map_err(AsError::into_error)?;
            Ok(view::fare_preview(&quote))
        }
    }
}
