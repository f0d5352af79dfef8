//! [`Lease`] read model definition.

use common::Date;
use derive_more::Deref;
use serde::Serialize;

use crate::domain::{lease, property, tenant, Lease};

/// Indicator whether a [`Lease`] is active on the day it was resolved.
#[derive(Clone, Copy, Debug, Deref, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IsActive(pub bool);

impl PartialEq<bool> for IsActive {
    fn eq(&self, other: &bool) -> bool {
        self.0 == *other
    }
}

/// [`Lease`] annotated with its activity on a particular day.
///
/// Computed per request against "today" and never persisted.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LeaseView {
    /// ID of the [`Lease`].
    pub id: lease::Id,

    /// First [`Date`] of the [`Lease`].
    pub lease_start: lease::StartDate,

    /// Last [`Date`] of the [`Lease`].
    pub lease_end: lease::EndDate,

    /// Monthly [`lease::Rent`] of the [`Lease`].
    pub rent: lease::Rent,

    /// ID of the [`Tenant`] renting under the [`Lease`].
    ///
    /// [`Tenant`]: crate::domain::Tenant
    #[serde(rename = "tenant")]
    pub tenant_id: tenant::Id,

    /// ID of the rented [`Property`].
    ///
    /// [`Property`]: crate::domain::Property
    #[serde(rename = "property")]
    pub property_id: property::Id,

    /// Whether the [`Lease`] is active on the resolution day.
    pub active: IsActive,
}

impl LeaseView {
    /// Builds a new [`LeaseView`] of the provided [`Lease`], computing its
    /// activity on the provided [`Date`].
    #[must_use]
    pub fn new(lease: Lease, on: Date) -> Self {
        let active = IsActive(lease.is_active(on));
        Self {
            id: lease.id,
            lease_start: lease.lease_start,
            lease_end: lease.lease_end,
            rent: lease.rent,
            tenant_id: lease.tenant_id,
            property_id: lease.property_id,
            active,
        }
    }
}

/// Annotates every of the provided [`Lease`]s with its activity on the
/// provided [`Date`].
///
/// No leases produce an empty [`Vec`]: whether that becomes `[]` or `null`
/// on the wire is up to the serialization layer.
#[must_use]
pub fn resolve(
    leases: impl IntoIterator<Item = Lease>,
    on: Date,
) -> Vec<LeaseView> {
    leases.into_iter().map(|l| LeaseView::new(l, on)).collect()
}

#[cfg(test)]
mod spec {
    use super::{resolve, Lease};
    use crate::domain::{lease, property, tenant};
    use common::Date;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn lease(start: &str, end: &str) -> Lease {
        Lease {
            id: lease::Id::new(),
            lease_start: start.parse().unwrap(),
            lease_end: end.parse().unwrap(),
            rent: lease::Rent::from(1200),
            tenant_id: tenant::Id::new(),
            property_id: property::Id::new(),
        }
    }

    #[test]
    fn annotates_each_lease() {
        let views = resolve(
            [lease("2024-01-01", "2024-06-30"), lease("2023-01-01", "2023-06-30")],
            date("2024-02-01"),
        );

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].active, true);
        assert_eq!(views[1].active, false);
    }

    #[test]
    fn no_leases_resolve_to_empty() {
        assert!(resolve([], date("2024-02-01")).is_empty());
    }
}
