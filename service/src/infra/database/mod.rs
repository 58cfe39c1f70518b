//! [`Database`]-related implementations.

pub mod local_storage;

use derive_more::{Display, Error as StdError, From};

pub use self::local_storage::LocalStorage;

/// Database operation.
pub use common::Handler as Database;

/// [`Database`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`LocalStorage`] error.
    #[display("`LocalStorage` error: {_0}")]
    LocalStorage(local_storage::Error),
}
