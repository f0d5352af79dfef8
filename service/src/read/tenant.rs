//! [`Tenant`]-related read definitions.
//!
//! [`Tenant`]: crate::domain::Tenant

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{landlord, tenant, Tenant};

use super::LeaseView;

/// [`Tenant`] projected together with its resolved [`LeaseView`]s.
///
/// [`Tenant`]: crate::domain::Tenant
#[derive(Clone, Debug, Serialize)]
pub struct WithLeases {
    /// ID of the [`Tenant`].
    ///
    /// [`Tenant`]: Tenant
    pub id: tenant::Id,

    /// [`tenant::PhoneNumber`] of the [`Tenant`], if known.
    ///
    /// [`Tenant`]: Tenant
    pub phone_number: Option<tenant::PhoneNumber>,

    /// [`tenant::Email`] of the [`Tenant`], if known.
    ///
    /// [`Tenant`]: Tenant
    pub email: Option<tenant::Email>,

    /// ID of the owning [`Landlord`].
    ///
    /// [`Landlord`]: crate::domain::Landlord
    #[serde(rename = "landlord")]
    pub landlord_id: landlord::Id,

    /// [`tenant::FullName`] of the [`Tenant`].
    ///
    /// [`Tenant`]: Tenant
    pub full_name: tenant::FullName,

    /// Resolved [`LeaseView`]s of the [`Tenant`].
    ///
    /// [`Tenant`]: Tenant
    pub leases: Vec<LeaseView>,
}

impl WithLeases {
    /// Projects the provided [`Tenant`] with its resolved [`LeaseView`]s.
    #[must_use]
    pub fn new(tenant: Tenant, leases: Vec<LeaseView>) -> Self {
        Self {
            id: tenant.id,
            phone_number: tenant.phone_number,
            email: tenant.email,
            landlord_id: tenant.landlord_id,
            full_name: tenant.full_name,
            leases,
        }
    }
}

/// Compact id→name mapping of [`Tenant`]s, as table widgets consume it.
///
/// [`Tenant`]: Tenant
pub type Table = HashMap<tenant::Id, tenant::FullName>;

pub mod list {
    //! [`Tenant`]s list definitions.
    //!
    //! [`Tenant`]: crate::domain::Tenant

    use crate::domain::Tenant;

    /// Filter for a [`Tenant`]s listing.
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// Term to search [`Tenant`]s by.
        pub search: Option<String>,
    }

    impl Filter {
        /// Indicates whether the provided [`Tenant`] passes this [`Filter`].
        ///
        /// The search term matches case-insensitively as a substring of the
        /// phone number, the email or the full name.
        #[must_use]
        pub fn matches(&self, tenant: &Tenant) -> bool {
            let Some(term) = &self.search else {
                return true;
            };
            let term = term.to_lowercase();

            let hit = |field: &str| field.to_lowercase().contains(&term);

            tenant
                .phone_number
                .as_ref()
                .is_some_and(|p| hit(p.as_ref()))
                || tenant.email.as_ref().is_some_and(|e| hit(e.as_ref()))
                || hit(tenant.full_name.as_ref())
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{list, tenant, Tenant};
    use crate::domain::landlord;

    fn jane(landlord_id: landlord::Id) -> Tenant {
        Tenant {
            id: tenant::Id::new(),
            full_name: "Jane Doe".parse().unwrap(),
            phone_number: Some("555-0134".parse().unwrap()),
            email: Some("jane@example.com".parse().unwrap()),
            landlord_id,
        }
    }

    #[test]
    fn empty_filter_matches_everyone() {
        let t = jane(landlord::Id::new());
        assert!(list::Filter::default().matches(&t));
    }

    #[test]
    fn search_spans_phone_email_and_name() {
        let t = jane(landlord::Id::new());

        for term in ["0134", "jane@", "doe", "JANE"] {
            let filter = list::Filter {
                search: Some(term.into()),
            };
            assert!(filter.matches(&t), "term {term:?} should match");
        }

        let miss = list::Filter {
            search: Some("smith".into()),
        };
        assert!(!miss.matches(&t));
    }

    #[test]
    fn missing_optional_fields_are_not_searched() {
        let mut t = jane(landlord::Id::new());
        t.phone_number = None;
        t.email = None;

        let filter = list::Filter {
            search: Some("0134".into()),
        };
        assert!(!filter.matches(&t));
    }
}
