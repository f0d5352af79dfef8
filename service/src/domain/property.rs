//! [`Property`] definitions.

use std::str;

use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{landlord, Owned};

/// Rental property owned by a [`Landlord`].
///
/// [`Landlord`]: super::Landlord
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// [`Street`] address of this [`Property`].
    pub street: Street,

    /// [`City`] this [`Property`] is located in.
    pub city: City,

    /// [`State`] this [`Property`] is located in.
    pub state: State,

    /// [`PostalCode`] of this [`Property`].
    pub postal_code: PostalCode,

    /// ID of the [`Landlord`] owning this [`Property`].
    ///
    /// [`Landlord`]: super::Landlord
    #[serde(rename = "landlord")]
    pub landlord_id: landlord::Id,
}

impl Owned for Property {
    fn landlord_id(&self) -> landlord::Id {
        self.landlord_id
    }
}

/// ID of a [`Property`].
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

/// Street address of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Street(String);

impl Street {
    /// Creates a new [`Street`] if the given `street` is valid.
    #[must_use]
    pub fn new(street: impl Into<String>) -> Option<Self> {
        let street = street.into();
        Self::check(&street).then_some(Self(street))
    }

    /// Checks whether the given `street` is a valid [`Street`].
    fn check(street: impl AsRef<str>) -> bool {
        let street = street.as_ref();
        street.trim() == street && !street.is_empty() && street.len() <= 100
    }
}

impl str::FromStr for Street {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Street`")
    }
}

/// City of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct City(String);

impl City {
    /// Creates a new [`City`] if the given `city` is valid.
    #[must_use]
    pub fn new(city: impl Into<String>) -> Option<Self> {
        let city = city.into();
        Self::check(&city).then_some(Self(city))
    }

    /// Checks whether the given `city` is a valid [`City`].
    fn check(city: impl AsRef<str>) -> bool {
        let city = city.as_ref();
        city.trim() == city && !city.is_empty() && city.len() <= 50
    }
}

impl str::FromStr for City {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `City`")
    }
}

/// State of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct State(String);

impl State {
    /// Creates a new [`State`] if the given `state` is valid.
    #[must_use]
    pub fn new(state: impl Into<String>) -> Option<Self> {
        let state = state.into();
        Self::check(&state).then_some(Self(state))
    }

    /// Checks whether the given `state` is a valid [`State`].
    fn check(state: impl AsRef<str>) -> bool {
        let state = state.as_ref();
        state.trim() == state && !state.is_empty() && state.len() <= 50
    }
}

impl str::FromStr for State {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `State`")
    }
}

/// Postal code of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Creates a new [`PostalCode`] if the given `code` is valid.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        Self::check(&code).then_some(Self(code))
    }

    /// Checks whether the given `code` is a valid [`PostalCode`].
    fn check(code: impl AsRef<str>) -> bool {
        let code = code.as_ref();
        code.trim() == code && !code.is_empty() && code.len() <= 50
    }
}

impl str::FromStr for PostalCode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `PostalCode`")
    }
}
