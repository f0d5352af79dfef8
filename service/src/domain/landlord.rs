//! [`Landlord`] definitions.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account owner: every tenant, property and payment belongs to exactly one
/// [`Landlord`].
///
/// Credentials and principal resolution live outside of this crate; here a
/// [`Landlord`] is nothing but an identity to scope records by.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Landlord {
    /// ID of this [`Landlord`].
    pub id: Id,
}

/// ID of a [`Landlord`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}
