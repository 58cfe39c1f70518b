//! Service contains the business logic of the e-jeep booking.
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

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;

use std::time::Duration;

#[cfg(test)]
use futures as _;
use smart_default::SmartDefault;
use tokio::sync::broadcast;

use crate::domain::Tier;
#[cfg(doc)]
use crate::infra::Database;

pub use self::{command::Command, query::Query};

/// Capacity of the [`Tier`] changes channel.
const PLAN_CHANGES_CAPACITY: usize = 16;

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Delay before a submitted reservation is recorded.
    ///
    /// Zero records it right away.
    #[default(Duration::from_millis(800))]
    pub submit_delay: Duration,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    database: Db,

    /// Notifier of subscription [`Tier`] changes.
    plan_changes: broadcast::Sender<Tier>,
}

impl<Db> Service<Db> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, database: Db) -> Self {
        let (plan_changes, _) = broadcast::channel(PLAN_CHANGES_CAPACITY);
        Self {
            config,
            database,
            plan_changes,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }

    /// Subscribes to the subscription [`Tier`] changes made via
    /// [`command::SelectPlan`].
    #[must_use]
    pub fn subscribe_plan_changes(&self) -> broadcast::Receiver<Tier> {
        self.plan_changes.subscribe()
    }
}
