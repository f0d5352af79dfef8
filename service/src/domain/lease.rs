//! [`Lease`] definitions.

use common::{unit, Date, DateOf};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{property, tenant};

/// Relation renting a [`Property`] out to a [`Tenant`] for a period.
///
/// [`Property`]: super::Property
/// [`Tenant`]: super::Tenant
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Lease {
    /// ID of this [`Lease`].
    pub id: Id,

    /// First [`Date`] of this [`Lease`].
    pub lease_start: StartDate,

    /// Last [`Date`] of this [`Lease`].
    pub lease_end: EndDate,

    /// Monthly [`Rent`] agreed in this [`Lease`].
    pub rent: Rent,

    /// ID of the [`Tenant`] renting under this [`Lease`].
    ///
    /// [`Tenant`]: super::Tenant
    #[serde(rename = "tenant")]
    pub tenant_id: tenant::Id,

    /// ID of the rented [`Property`].
    ///
    /// [`Property`]: super::Property
    #[serde(rename = "property")]
    pub property_id: property::Id,
}

impl Lease {
    /// Indicates whether this [`Lease`] is active on the provided [`Date`].
    ///
    /// The period is closed on both ends: the first and the last days of the
    /// lease count as active. The same policy applies no matter whether the
    /// lease was reached through its tenant or its property.
    #[must_use]
    pub fn is_active(&self, on: Date) -> bool {
        self.lease_start.coerce() <= on && on <= self.lease_end.coerce()
    }
}

/// ID of a [`Lease`].
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

/// Monthly rent agreed in a [`Lease`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Rent(i64);

/// [`Date`] when a [`Lease`] starts.
pub type StartDate = DateOf<(Lease, unit::Start)>;

/// [`Date`] when a [`Lease`] ends.
pub type EndDate = DateOf<(Lease, unit::End)>;

#[cfg(test)]
mod spec {
    use super::{Lease, Rent};
    use crate::domain::{property, tenant};
    use common::Date;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn lease(start: &str, end: &str) -> Lease {
        Lease {
            id: super::Id::new(),
            lease_start: start.parse().unwrap(),
            lease_end: end.parse().unwrap(),
            rent: Rent::from(1000),
            tenant_id: tenant::Id::new(),
            property_id: property::Id::new(),
        }
    }

    #[test]
    fn active_within_period() {
        let l = lease("2024-01-01", "2024-12-31");
        assert!(l.is_active(date("2024-06-15")));
    }

    #[test]
    fn active_on_both_boundary_days() {
        let l = lease("2024-01-01", "2024-12-31");
        assert!(l.is_active(date("2024-01-01")));
        assert!(l.is_active(date("2024-12-31")));
    }

    #[test]
    fn inactive_outside_period() {
        let l = lease("2024-01-01", "2024-12-31");
        assert!(!l.is_active(date("2023-12-31")));
        assert!(!l.is_active(date("2025-01-01")));
    }

    #[test]
    fn single_day_lease_is_active_on_that_day() {
        let l = lease("2024-03-01", "2024-03-01");
        assert!(l.is_active(date("2024-03-01")));
        assert!(!l.is_active(date("2024-03-02")));
    }
}
