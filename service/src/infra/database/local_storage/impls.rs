//! [`Database`] operations of a [`LocalStorage`].

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{reservation, Reservation, Tier},
    infra::{database, Database},
};

use super::{KeyValue, LocalStorage};

impl<Kv: KeyValue> Database<Select<By<Vec<Reservation>, ()>>>
    for LocalStorage<Kv>
{
    type Ok = Vec<Reservation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Reservation>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.load_reservations())
    }
}

impl<Kv: KeyValue> Database<Insert<Reservation>> for LocalStorage<Kv> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(reservation): Insert<Reservation>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut reservations = self.load_reservations();
        reservations.push(reservation);
        self.save_reservations(&reservations)
            .map_err(tracerr::wrap!())
    }
}

impl<Kv: KeyValue> Database<Delete<By<Reservation, reservation::Id>>>
    for LocalStorage<Kv>
{
    type Ok = Option<Reservation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Reservation, reservation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        let mut reservations = self.load_reservations();
        let Some(pos) = reservations.iter().position(|r| r.id == id) else {
            log::debug!("no `Reservation(id: {id})` to delete");
            return Ok(None);
        };
        let removed = reservations.remove(pos);

        self.save_reservations(&reservations)
            .map_err(tracerr::wrap!())?;
        Ok(Some(removed))
    }
}

impl<Kv: KeyValue> Database<Select<By<Tier, ()>>> for LocalStorage<Kv> {
    type Ok = Tier;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Tier, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.load_subscription())
    }
}

impl<Kv: KeyValue> Database<Update<Tier>> for LocalStorage<Kv> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(tier): Update<Tier>,
    ) -> Result<Self::Ok, Self::Err> {
        self.save_subscription(tier).map_err(tracerr::wrap!())
    }
}
