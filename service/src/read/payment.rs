//! [`Payment`]-related read definitions.
//!
//! [`Payment`]: crate::domain::Payment

use common::Amount;
use serde::Serialize;

use crate::domain::{payment, Payment, Tenant};

/// [`Payment`] projected with its [`Tenant`] record attached.
///
/// [`Payment`]: Payment
#[derive(Clone, Debug, Serialize)]
pub struct PaymentView {
    /// ID of the [`Payment`].
    ///
    /// [`Payment`]: Payment
    pub id: payment::Id,

    /// [`payment::Date`] of the [`Payment`].
    ///
    /// [`Payment`]: Payment
    pub date: payment::Date,

    /// [`Amount`] of the [`Payment`].
    ///
    /// [`Payment`]: Payment
    pub amount: Amount,

    /// [`payment::RefNum`] of the [`Payment`].
    ///
    /// [`Payment`]: Payment
    pub ref_num: payment::RefNum,

    /// [`Tenant`] who made the [`Payment`].
    ///
    /// [`Payment`]: Payment
    pub tenant: Tenant,

    /// [`payment::Kind`] of the [`Payment`].
    ///
    /// [`Payment`]: Payment
    #[serde(rename = "payment_type")]
    pub kind: payment::Kind,
}

impl PaymentView {
    /// Projects the provided [`Payment`] with its [`Tenant`] record.
    #[must_use]
    pub fn new(payment: Payment, tenant: Tenant) -> Self {
        Self {
            id: payment.id,
            date: payment.date,
            amount: payment.amount,
            ref_num: payment.ref_num,
            tenant,
            kind: payment.kind,
        }
    }
}

pub mod list {
    //! [`Payment`]s list definitions.
    //!
    //! [`Payment`]: crate::domain::Payment

    use common::DateRange;

    use crate::domain::{tenant, Payment, Tenant};

    use super::PaymentView;

    /// Filter for a [`Payment`]s listing.
    ///
    /// Dimensions are independent and compose with a logical AND.
    ///
    /// [`Payment`]: Payment
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// Keyword to search [`Payment`]s by.
        ///
        /// [`Payment`]: Payment
        pub keyword: Option<String>,

        /// [`DateRange`] to keep [`Payment`]s within.
        ///
        /// [`Payment`]: Payment
        pub date: Option<DateRange>,

        /// Exact [`Tenant`] to keep [`Payment`]s of.
        ///
        /// [`Payment`]: Payment
        pub tenant: Option<tenant::Id>,
    }

    impl Filter {
        /// Indicates whether the provided [`Payment`] (made by the provided
        /// [`Tenant`]) passes this [`Filter`].
        ///
        /// The keyword matches case-insensitively as a substring of either
        /// the reference number or the tenant's full name.
        #[must_use]
        pub fn matches(&self, payment: &Payment, tenant: &Tenant) -> bool {
            if let Some(keyword) = &self.keyword {
                let keyword = keyword.to_lowercase();
                let hit =
                    |field: &str| field.to_lowercase().contains(&keyword);
                if !hit(payment.ref_num.as_ref())
                    && !hit(tenant.full_name.as_ref())
                {
                    return false;
                }
            }

            if let Some(range) = &self.date {
                if !range.contains(payment.date) {
                    return false;
                }
            }

            if let Some(tenant_id) = self.tenant {
                if payment.tenant_id != tenant_id {
                    return false;
                }
            }

            true
        }
    }

    /// Sorts the provided [`PaymentView`]s most recent first.
    ///
    /// The sort is stable: same-day payments keep their relative order.
    pub fn sort(views: &mut [PaymentView]) {
        views.sort_by(|a, b| b.date.cmp(&a.date));
    }
}

#[cfg(test)]
mod spec {
    use super::{list, payment, Payment, PaymentView, Tenant};
    use crate::domain::{landlord, tenant};
    use common::DateRange;

    fn tenant_named(full_name: &str) -> Tenant {
        Tenant {
            id: tenant::Id::new(),
            full_name: full_name.parse().unwrap(),
            phone_number: None,
            email: None,
            landlord_id: landlord::Id::new(),
        }
    }

    fn payment_of(tenant: &Tenant, date: &str, ref_num: &str) -> Payment {
        Payment {
            id: payment::Id::new(),
            date: date.parse().unwrap(),
            amount: "500".parse().unwrap(),
            ref_num: ref_num.parse().unwrap(),
            tenant_id: tenant.id,
            property_id: None,
            kind: payment::Kind::Check,
            landlord_id: tenant.landlord_id,
        }
    }

    #[test]
    fn keyword_matches_ref_num_or_tenant_name() {
        let jane = tenant_named("Jane Doe");
        let p = payment_of(&jane, "2023-01-10", "CHK-100");

        for keyword in ["chk", "100", "jane", "DOE"] {
            let filter = list::Filter {
                keyword: Some(keyword.into()),
                ..list::Filter::default()
            };
            assert!(filter.matches(&p, &jane), "keyword {keyword:?}");
        }

        let miss = list::Filter {
            keyword: Some("wire".into()),
            ..list::Filter::default()
        };
        assert!(!miss.matches(&p, &jane));
    }

    #[test]
    fn keyword_matching_both_fields_counts_once() {
        let jane = tenant_named("Jane 100");
        let p = payment_of(&jane, "2023-01-10", "CHK-100");

        let filter = list::Filter {
            keyword: Some("100".into()),
            ..list::Filter::default()
        };
        let payments = [p];
        let matched = payments
            .iter()
            .filter(|p| filter.matches(p, &jane))
            .count();
        assert_eq!(matched, 1);
    }

    #[test]
    fn date_range_is_a_closed_interval() {
        let jane = tenant_named("Jane Doe");
        let range: DateRange = "2023-01-01/2023-01-31".parse().unwrap();
        let filter = list::Filter {
            date: Some(range),
            ..list::Filter::default()
        };

        let inside = payment_of(&jane, "2023-01-01", "A");
        let edge = payment_of(&jane, "2023-01-31", "B");
        let outside = payment_of(&jane, "2023-02-01", "C");

        assert!(filter.matches(&inside, &jane));
        assert!(filter.matches(&edge, &jane));
        assert!(!filter.matches(&outside, &jane));
    }

    #[test]
    fn dimensions_compose_with_and() {
        let jane = tenant_named("Jane Doe");
        let other = tenant_named("John Roe");
        let p = payment_of(&jane, "2023-01-10", "CHK-100");

        let filter = list::Filter {
            keyword: Some("chk".into()),
            date: Some("2023-01-01/2023-01-31".parse().unwrap()),
            tenant: Some(other.id),
        };
        // Keyword and range match, the tenant dimension doesn't.
        assert!(!filter.matches(&p, &jane));
    }

    #[test]
    fn sort_is_most_recent_first_and_stable() {
        let jane = tenant_named("Jane Doe");
        let mut views = [
            PaymentView::new(payment_of(&jane, "2023-01-10", "A"), jane.clone()),
            PaymentView::new(payment_of(&jane, "2023-03-05", "B"), jane.clone()),
            PaymentView::new(payment_of(&jane, "2023-01-10", "C"), jane.clone()),
        ];

        list::sort(&mut views);

        let order = views
            .iter()
            .map(|v| v.ref_num.to_string())
            .collect::<Vec<_>>();
        assert_eq!(order, ["B", "A", "C"]);
    }
}
