//! [`Query`] collection related to the [`Reservation`]s.

use common::operations::By;

use crate::domain::Reservation;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all the [`Reservation`]s, in the order of their creation.
pub type List = DatabaseQuery<By<Vec<Reservation>, ()>>;
