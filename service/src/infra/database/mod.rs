//! [`Database`]-related implementations.

pub mod in_memory;

use common::ErrorKind;
use derive_more::{Display, Error as StdError, From};

pub use self::in_memory::InMemory;

/// Database operation.
pub use common::Handler as Database;

/// [`Database`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`InMemory`] store error.
    InMemory(in_memory::Error),
}

impl Error {
    /// Returns the [`ErrorKind`] of this [`Error`].
    ///
    /// Store failures are never the caller's fault.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Internal
    }
}
