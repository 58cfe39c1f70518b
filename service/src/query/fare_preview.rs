//! [`Query`] previewing the fare of a booking form being filled.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{reservation::form::leading_integer, Quote, Route, Tier},
    infra::{database, Database},
    query::subscription,
    Service,
};

use super::Query;

/// [`Query`] quoting the fare for the raw route and seats values of a
/// booking form, with the current subscription [`Tier`].
///
/// Values are taken as is: an empty route costs nothing, seats are read up to
/// their first non-digit, and seats that are not a number count as zero.
#[derive(Clone, Debug, Default)]
pub struct FarePreview {
    /// Raw route code.
    pub route: String,

    /// Raw number of seats.
    pub seats: String,
}

impl<Db> Query<FarePreview> for Service<Db>
where
    Db: Database<
        Select<By<Tier, ()>>,
        Ok = Tier,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Quote;
    type Err = Traced<database::Error>;

    async fn execute(&self, query: FarePreview) -> Result<Self::Ok, Self::Err> {
        let FarePreview { route, seats } = query;

        let tier = self
            .execute(subscription::Current::all())
            .await
            .map_err(tracerr::wrap!())?;

        let route = Route::from(route.trim().to_owned());
        let seats = leading_integer(&seats)
            .ok()
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0);
        Ok(Quote::new(&route, seats, tier))
    }
}
