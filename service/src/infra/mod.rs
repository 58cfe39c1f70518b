//! Infrastructure layer.

pub mod database;

pub use self::database::{local_storage, Database, LocalStorage};
