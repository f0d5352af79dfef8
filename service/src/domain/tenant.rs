//! [`Tenant`] definitions.

use std::str;

use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{landlord, Owned};

/// Renter tracked by a [`Landlord`].
///
/// Leases of a [`Tenant`] are never stored on it: they're derived from the
/// relation records on demand (see [`read::LeaseView`]).
///
/// [`Landlord`]: super::Landlord
/// [`read::LeaseView`]: crate::read::LeaseView
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Tenant {
    /// ID of this [`Tenant`].
    pub id: Id,

    /// [`FullName`] of this [`Tenant`].
    pub full_name: FullName,

    /// [`PhoneNumber`] of this [`Tenant`], if known.
    pub phone_number: Option<PhoneNumber>,

    /// [`Email`] of this [`Tenant`], if known.
    pub email: Option<Email>,

    /// ID of the [`Landlord`] owning this [`Tenant`].
    ///
    /// [`Landlord`]: super::Landlord
    #[serde(rename = "landlord")]
    pub landlord_id: landlord::Id,
}

impl Owned for Tenant {
    fn landlord_id(&self) -> landlord::Id {
        self.landlord_id
    }
}

/// ID of a [`Tenant`].
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

/// Full name of a [`Tenant`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct FullName(String);

impl FullName {
    /// Creates a new [`FullName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`FullName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 150
    }
}

impl str::FromStr for FullName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `FullName`")
    }
}

/// Phone number of a [`Tenant`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Creates a new [`PhoneNumber`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`PhoneNumber`].
    fn check(number: impl AsRef<str>) -> bool {
        let number = number.as_ref();
        number.trim() == number && !number.is_empty() && number.len() <= 15
    }
}

impl str::FromStr for PhoneNumber {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `PhoneNumber`")
    }
}

/// Email address of a [`Tenant`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `email` is valid.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Option<Self> {
        let email = email.into();
        Self::check(&email).then_some(Self(email))
    }

    /// Checks whether the given `email` is a valid [`Email`].
    fn check(email: impl AsRef<str>) -> bool {
        let email = email.as_ref();
        email.trim() == email && !email.is_empty() && email.len() <= 150
    }
}

impl str::FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}
