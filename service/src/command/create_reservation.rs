//! [`Command`] for creating a new [`Reservation`].

use common::operations::Insert;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{reservation, Reservation},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Reservation`] out of a validated
/// [`reservation::Draft`].
#[derive(Clone, Debug)]
pub struct CreateReservation {
    /// [`reservation::Draft`] of a new [`Reservation`].
    pub draft: reservation::Draft,
}

impl<Db> Command<CreateReservation> for Service<Db>
where
    Db: Database<Insert<Reservation>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Reservation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateReservation,
    ) -> Result<Self::Ok, Self::Err> {
        let CreateReservation { draft } = cmd;

        let reservation = Reservation::new(reservation::Id::new(), draft);

        self.database()
            .execute(Insert(reservation.clone()))
            .await
            .map_err(tracerr::wrap!())?;

        log::info!(
            "`Reservation(id: {})` created for {} seat(s) on `{}`",
            reservation.id,
            reservation.seats,
            reservation.travel_date,
        );

        Ok(reservation)
    }
}

/// Error of [`CreateReservation`] [`Command`] execution.
pub type ExecutionError = database::Error;
