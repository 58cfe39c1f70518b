//! [`Command`] for deleting a [`Reservation`].

use common::operations::{By, Delete};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{reservation, Reservation},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Reservation`] by its [`reservation::Id`].
///
/// Deleting an unknown [`Reservation`] is a no-op.
#[derive(Clone, Debug)]
pub struct DeleteReservation {
    /// ID of the [`Reservation`] to delete.
    pub id: reservation::Id,
}

impl<Db> Command<DeleteReservation> for Service<Db>
where
    Db: Database<
        Delete<By<Reservation, reservation::Id>>,
        Ok = Option<Reservation>,
        Err = Traced<database::Error>,
    >,
{
    /// Deleted [`Reservation`], if it existed.
    type Ok = Option<Reservation>;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteReservation,
    ) -> Result<Self::Ok, Self::Err> {
        let DeleteReservation { id } = cmd;

        let deleted = self
            .database()
            .execute(Delete(By::new(id)))
            .await
            .map_err(tracerr::wrap!())?;
        if let Some(r) = &deleted {
            log::info!("`Reservation(id: {})` deleted", r.id);
        }

        Ok(deleted)
    }
}

/// Error of [`DeleteReservation`] [`Command`] execution.
pub type ExecutionError = database::Error;

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::Date;
    use futures::executor::block_on;

    use crate::{
        command::CreateReservation,
        domain::{reservation::Form, Reservation, Tier},
        infra::{local_storage::Memory, LocalStorage},
        query, Command as _, Config, Query as _, Service,
    };

    use super::DeleteReservation;

    fn service() -> Service<LocalStorage<Memory>> {
        Service::new(
            Config {
                submit_delay: Duration::ZERO,
            },
            LocalStorage::default(),
        )
    }

    fn create(svc: &Service<LocalStorage<Memory>>) -> Reservation {
        let today = Date::today();
        let draft = Form {
            full_name: "Carla Reyes".into(),
            contact_number: "0912345678".into(),
            travel_date: today.to_string(),
            travel_time: "12:00".into(),
            route: "suburb".into(),
            seats: "1".into(),
            notes: "front seat".into(),
        }
        .validate(Tier::Free, today)
        .unwrap();
        block_on(svc.execute(CreateReservation { draft })).unwrap()
    }

    fn list(svc: &Service<LocalStorage<Memory>>) -> Vec<Reservation> {
        block_on(svc.execute(query::reservations::List::all())).unwrap()
    }

    #[test]
    fn create_then_delete_leaves_empty_list() {
        let svc = service();
        let reservation = create(&svc);

        let deleted = block_on(svc.execute(DeleteReservation {
            id: reservation.id.clone(),
        }))
        .unwrap();

        assert_eq!(deleted, Some(reservation));
        assert!(list(&svc).is_empty());
    }

    #[test]
    fn deletes_only_matching() {
        let svc = service();
        let first = create(&svc);
        let second = create(&svc);
        let third = create(&svc);

        _ = block_on(svc.execute(DeleteReservation {
            id: second.id.clone(),
        }))
        .unwrap();

        assert_eq!(list(&svc), [first, third]);
    }

    #[test]
    fn unknown_id_is_noop() {
        let svc = service();
        let reservation = create(&svc);

        let deleted = block_on(svc.execute(DeleteReservation {
            id: "1718000000000".into(),
        }))
        .unwrap();

        assert_eq!(deleted, None);
        assert_eq!(list(&svc), [reservation.clone()]);

        _ = block_on(svc.execute(DeleteReservation {
            id: reservation.id.clone(),
        }))
        .unwrap();
        let deleted_twice =
            block_on(svc.execute(DeleteReservation { id: reservation.id }))
                .unwrap();

        assert_eq!(deleted_twice, None);
        assert!(list(&svc).is_empty());
    }
}
