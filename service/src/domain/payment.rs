//! [`Payment`] definitions.

use std::str;

use common::{define_kind, Amount, DateOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{landlord, property, tenant, Owned};

/// Rent payment recorded by a [`Landlord`].
///
/// [`Landlord`]: super::Landlord
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Payment {
    /// ID of this [`Payment`].
    pub id: Id,

    /// [`Date`] this [`Payment`] was made on.
    ///
    /// [`Date`]: common::Date
    pub date: Date,

    /// [`Amount`] of this [`Payment`].
    pub amount: Amount,

    /// [`RefNum`] of this [`Payment`].
    pub ref_num: RefNum,

    /// ID of the [`Tenant`] who made this [`Payment`].
    ///
    /// [`Tenant`]: super::Tenant
    #[serde(rename = "tenant")]
    pub tenant_id: tenant::Id,

    /// ID of the [`Property`] this [`Payment`] covers, if tracked.
    ///
    /// [`Property`]: super::Property
    #[serde(rename = "property")]
    pub property_id: Option<property::Id>,

    /// [`Kind`] of this [`Payment`].
    #[serde(rename = "payment_type")]
    pub kind: Kind,

    /// ID of the [`Landlord`] owning this [`Payment`].
    ///
    /// [`Landlord`]: super::Landlord
    #[serde(rename = "landlord")]
    pub landlord_id: landlord::Id,
}

impl Owned for Payment {
    fn landlord_id(&self) -> landlord::Id {
        self.landlord_id
    }
}

/// ID of a [`Payment`].
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

/// Reference number of a [`Payment`] (check number, transaction id, etc).
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct RefNum(String);

impl RefNum {
    /// Creates a new [`RefNum`] if the given `num` is valid.
    #[must_use]
    pub fn new(num: impl Into<String>) -> Option<Self> {
        let num = num.into();
        Self::check(&num).then_some(Self(num))
    }

    /// Checks whether the given `num` is a valid [`RefNum`].
    fn check(num: impl AsRef<str>) -> bool {
        let num = num.as_ref();
        num.trim() == num && !num.is_empty() && num.len() <= 100
    }
}

impl str::FromStr for RefNum {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `RefNum`")
    }
}

/// [`Date`] a [`Payment`] was made on.
///
/// [`Date`]: common::Date
pub type Date = DateOf<Payment>;

define_kind! {
    #[doc = "Kind of a [`Payment`]: how the money was handed over."]
    enum Kind {
        #[doc = "A personal or cashier's check."]
        Check = 1,

        #[doc = "Cash."]
        Cash = 2,

        #[doc = "A credit card charge."]
        CreditCard = 3,

        #[doc = "A bank transfer."]
        BankTransfer = 4,
    }
}

impl Serialize for Kind {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.u8())
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        Self::try_from(u8::deserialize(deserializer)?)
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod spec {
    use super::Kind;

    #[test]
    fn kind_has_stable_numeric_ids() {
        assert_eq!(Kind::Check.u8(), 1);
        assert_eq!(Kind::try_from(4).unwrap(), Kind::BankTransfer);
        assert!(Kind::try_from(9).is_err());
    }

    #[test]
    fn kind_displays_as_label() {
        assert_eq!(Kind::Cash.to_string(), "Cash");
        assert_eq!(Kind::CreditCard.to_string(), "Credit Card");
    }
}
