//! [`Command`] for selecting a subscription plan.

use common::operations::Update;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Tier,
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for switching the subscription to the provided [`Tier`].
///
/// Already stored reservations keep their fares. Subscribers of
/// [`Service::subscribe_plan_changes()`] are notified once the [`Tier`] is
/// stored.
#[derive(Clone, Copy, Debug)]
pub struct SelectPlan {
    /// [`Tier`] to switch to.
    pub tier: Tier,
}

impl<Db> Command<SelectPlan> for Service<Db>
where
    Db: Database<Update<Tier>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: SelectPlan) -> Result<Self::Ok, Self::Err> {
        let SelectPlan { tier } = cmd;

        self.database()
            .execute(Update(tier))
            .await
            .map_err(tracerr::wrap!())?;

        log::info!("subscription switched to `{tier}`");

        // No subscribers is not an error.
        _ = self.plan_changes.send(tier);

        Ok(())
    }
}

/// Error of [`SelectPlan`] [`Command`] execution.
pub type ExecutionError = database::Error;
