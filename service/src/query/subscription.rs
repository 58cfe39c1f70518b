//! [`Query`] collection related to the subscription [`Tier`].

use common::operations::By;

use crate::domain::Tier;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the current subscription [`Tier`].
pub type Current = DatabaseQuery<By<Tier, ()>>;
