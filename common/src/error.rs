//! Error classification.

use derive_more::Display;

/// Coarse classification of an operation failure.
///
/// The transport boundary converts each variant into its status:
/// [`NotFound`] → 404, [`Validation`] → 400, [`Internal`] → 500.
///
/// [`Internal`]: ErrorKind::Internal
/// [`NotFound`]: ErrorKind::NotFound
/// [`Validation`]: ErrorKind::Validation
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorKind {
    /// Looked up entity doesn't exist (or isn't visible to the caller).
    NotFound,

    /// Provided input is malformed.
    Validation,

    /// Any other failure surfaced from a collaborator.
    Internal,
}
