//! Infrastructure layer.

pub mod database;

pub use self::database::{Database, InMemory};
