//! [`Command`] definition.

pub mod create_reservation;
pub mod delete_reservation;
pub mod select_plan;
pub mod submit_reservation;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_reservation::CreateReservation,
    delete_reservation::DeleteReservation, select_plan::SelectPlan,
    submit_reservation::SubmitReservation,
};
