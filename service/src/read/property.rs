//! [`Property`]-related read definitions.
//!
//! [`Property`]: crate::domain::Property

use serde::Serialize;

use crate::domain::{landlord, property, Property};

use super::LeaseView;

/// [`Property`] projected together with its resolved [`LeaseView`]s.
///
/// Built on single-item retrieval only: listings stay bare [`Property`]
/// records.
///
/// [`Property`]: Property
#[derive(Clone, Debug, Serialize)]
pub struct WithLeases {
    /// ID of the [`Property`].
    ///
    /// [`Property`]: Property
    pub id: property::Id,

    /// [`property::Street`] of the [`Property`].
    ///
    /// [`Property`]: Property
    pub street: property::Street,

    /// [`property::City`] of the [`Property`].
    ///
    /// [`Property`]: Property
    pub city: property::City,

    /// [`property::State`] of the [`Property`].
    ///
    /// [`Property`]: Property
    pub state: property::State,

    /// [`property::PostalCode`] of the [`Property`].
    ///
    /// [`Property`]: Property
    pub postal_code: property::PostalCode,

    /// ID of the owning [`Landlord`].
    ///
    /// [`Landlord`]: crate::domain::Landlord
    #[serde(rename = "landlord")]
    pub landlord_id: landlord::Id,

    /// Resolved [`LeaseView`]s of the [`Property`].
    ///
    /// [`Property`]: Property
    pub leases: Vec<LeaseView>,
}

impl WithLeases {
    /// Projects the provided [`Property`] with its resolved [`LeaseView`]s.
    #[must_use]
    pub fn new(property: Property, leases: Vec<LeaseView>) -> Self {
        Self {
            id: property.id,
            street: property.street,
            city: property.city,
            state: property.state,
            postal_code: property.postal_code,
            landlord_id: property.landlord_id,
            leases,
        }
    }
}

pub mod list {
    //! [`Property`] list definitions.
    //!
    //! [`Property`]: crate::domain::Property

    use crate::domain::Property;

    /// Filter for a [`Property`] listing.
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// Term to search [`Property`] records by.
        pub search: Option<String>,
    }

    impl Filter {
        /// Indicates whether the provided [`Property`] passes this
        /// [`Filter`].
        ///
        /// The search term matches case-insensitively as a substring of the
        /// street, the city, the state or the postal code.
        #[must_use]
        pub fn matches(&self, property: &Property) -> bool {
            let Some(term) = &self.search else {
                return true;
            };
            let term = term.to_lowercase();

            [
                property.street.as_ref(),
                property.city.as_ref(),
                property.state.as_ref(),
                property.postal_code.as_ref(),
            ]
            .into_iter()
            .any(|field: &str| field.to_lowercase().contains(&term))
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{list, property, Property};
    use crate::domain::landlord;

    fn oak_st(landlord_id: landlord::Id) -> Property {
        Property {
            id: property::Id::new(),
            street: "12 Oak St".parse().unwrap(),
            city: "Nashville".parse().unwrap(),
            state: "TN".parse().unwrap(),
            postal_code: "37011".parse().unwrap(),
            landlord_id,
        }
    }

    #[test]
    fn search_spans_all_address_fields() {
        let p = oak_st(landlord::Id::new());

        for term in ["oak", "nashville", "tn", "37011", "OAK ST"] {
            let filter = list::Filter {
                search: Some(term.into()),
            };
            assert!(filter.matches(&p), "term {term:?} should match");
        }

        let miss = list::Filter {
            search: Some("memphis".into()),
        };
        assert!(!miss.matches(&p));
    }
}
