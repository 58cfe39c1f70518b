//! [`Command`] for submitting a booking [`Form`].

use common::{
    operations::{By, Insert, Select},
    Date,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        reservation::{Errors, Form},
        Reservation, Tier,
    },
    infra::{database, Database},
    Service,
};

use super::{Command, CreateReservation};

/// [`Command`] for submitting a booking [`Form`].
///
/// The [`Form`] is validated and priced against the current subscription
/// [`Tier`], and, after the configured submit delay, recorded as a new
/// [`Reservation`].
#[derive(Clone, Debug)]
pub struct SubmitReservation {
    /// Submitted [`Form`].
    pub form: Form,
}

impl<Db> Command<SubmitReservation> for Service<Db>
where
    Db: Database<
            Select<By<Tier, ()>>,
            Ok = Tier,
            Err = Traced<database::Error>,
        > + Database<Insert<Reservation>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Reservation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SubmitReservation,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitReservation { form } = cmd;

        let tier = self
            .database()
            .execute(Select(By::<Tier, _>::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!())?;

        let draft = form
            .validate(tier, Date::today())
            .map_err(E::Invalid)
            .map_err(tracerr::wrap!())?;

        let delay = self.config().submit_delay;
        if !delay.is_zero() {
            log::debug!("recording `Reservation` in {delay:?}");
            tokio::time::sleep(delay).await;
        }

        self.execute(CreateReservation { draft })
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

/// Error of [`SubmitReservation`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// Submitted [`Form`] is invalid.
    #[display("Form is invalid: {_0}")]
    #[from(ignore)]
    Invalid(#[error(not(source))] Errors),
}
