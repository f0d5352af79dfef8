//! Integration tests exercising commands and queries against the in-memory
//! store.

use common::{operations::Insert, Amount, Date, ErrorKind, Handler as _};
use service::{
    command::{
        create_lease, CreateLease, CreatePayment, CreateProperty,
        CreateTenant, DeleteLease, DeleteProperty, DeleteTenant,
        UpdateTenant,
    },
    domain::{landlord, payment, Landlord, Payment, Property, Tenant},
    infra::InMemory,
    query, read, Service,
};

fn date(s: &str) -> Date {
    s.parse().unwrap()
}

/// Spins up an empty store with a single registered [`Landlord`].
async fn setup() -> (Service<InMemory>, landlord::Id) {
    let db = InMemory::new();
    let landlord = Landlord { id: landlord::Id::new() };
    db.execute(Insert(landlord)).await.unwrap();
    (Service::new(db), landlord.id)
}

async fn create_tenant(
    service: &Service<InMemory>,
    landlord_id: landlord::Id,
    full_name: &str,
) -> Tenant {
    service
        .execute(CreateTenant {
            landlord_id,
            full_name: full_name.parse().unwrap(),
            phone_number: None,
            email: None,
        })
        .await
        .unwrap()
}

async fn create_property(
    service: &Service<InMemory>,
    landlord_id: landlord::Id,
    street: &str,
) -> Property {
    service
        .execute(CreateProperty {
            landlord_id,
            street: street.parse().unwrap(),
            city: "Springfield".parse().unwrap(),
            state: "IL".parse().unwrap(),
            postal_code: "62704".parse().unwrap(),
        })
        .await
        .unwrap()
}

async fn create_payment(
    service: &Service<InMemory>,
    landlord_id: landlord::Id,
    tenant: &Tenant,
    property: Option<&Property>,
    on: &str,
    ref_num: &str,
) -> Payment {
    service
        .execute(CreatePayment {
            landlord_id,
            tenant_id: tenant.id,
            property_id: property.map(|p| p.id),
            date: on.parse().unwrap(),
            amount: Amount::from(1500),
            ref_num: ref_num.parse().unwrap(),
            kind: payment::Kind::Check,
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn tenant_view_annotates_lease_activity() {
    let (service, landlord_id) = setup().await;

    let tenant = create_tenant(&service, landlord_id, "Jane Doe").await;
    let property = create_property(&service, landlord_id, "12 Oak St").await;
    _ = service
        .execute(CreateLease {
            landlord_id,
            tenant_id: tenant.id,
            property_id: property.id,
            lease_start: "2024-01-01".parse().unwrap(),
            lease_end: "2024-12-31".parse().unwrap(),
            rent: 1500.into(),
        })
        .await
        .unwrap();

    let view = service
        .execute(query::tenant::ById {
            id: tenant.id,
            landlord_id,
            on: date("2024-06-15"),
        })
        .await
        .unwrap();
    assert_eq!(view.leases.len(), 1);
    assert_eq!(view.leases[0].active, true);

    let view = service
        .execute(query::tenant::ById {
            id: tenant.id,
            landlord_id,
            on: date("2025-02-01"),
        })
        .await
        .unwrap();
    assert_eq!(view.leases[0].active, false);

    // The property side resolves the same lease.
    let view = service
        .execute(query::property::ById {
            id: property.id,
            landlord_id,
            on: date("2024-06-15"),
        })
        .await
        .unwrap();
    assert_eq!(view.leases.len(), 1);
    assert_eq!(view.leases[0].active, true);
}

#[tokio::test]
async fn lease_creation_rejects_inverted_period() {
    let (service, landlord_id) = setup().await;

    let tenant = create_tenant(&service, landlord_id, "Jane Doe").await;
    let property = create_property(&service, landlord_id, "12 Oak St").await;

    let err = service
        .execute(CreateLease {
            landlord_id,
            tenant_id: tenant.id,
            property_id: property.id,
            lease_start: "2024-12-31".parse().unwrap(),
            lease_end: "2024-01-01".parse().unwrap(),
            rent: 1500.into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        create_lease::ExecutionError::InvalidPeriod { .. },
    ));
    assert_eq!(err.as_ref().kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn foreign_records_are_indistinguishable_from_absent_ones() {
    let (service, landlord_id) = setup().await;
    let other = Landlord { id: landlord::Id::new() };
    service.database().execute(Insert(other)).await.unwrap();

    let tenant = create_tenant(&service, landlord_id, "Jane Doe").await;

    let err = service
        .execute(query::tenant::ById {
            id: tenant.id,
            landlord_id: other.id,
            on: date("2024-06-15"),
        })
        .await
        .unwrap_err();
    assert_eq!(err.as_ref().kind(), ErrorKind::NotFound);

    let err = service
        .execute(UpdateTenant {
            id: tenant.id,
            landlord_id: other.id,
            full_name: "John Doe".parse().unwrap(),
            phone_number: None,
            email: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.as_ref().kind(), ErrorKind::NotFound);

    // The rightful owner still sees the record untouched.
    let view = service
        .execute(query::tenant::ById {
            id: tenant.id,
            landlord_id,
            on: date("2024-06-15"),
        })
        .await
        .unwrap();
    assert_eq!(view.full_name.to_string(), "Jane Doe");
}

#[tokio::test]
async fn deleting_tenant_cascades_to_leases_and_payments() {
    let (service, landlord_id) = setup().await;

    let tenant = create_tenant(&service, landlord_id, "Jane Doe").await;
    let property = create_property(&service, landlord_id, "12 Oak St").await;
    _ = service
        .execute(CreateLease {
            landlord_id,
            tenant_id: tenant.id,
            property_id: property.id,
            lease_start: "2024-01-01".parse().unwrap(),
            lease_end: "2024-12-31".parse().unwrap(),
            rent: 1500.into(),
        })
        .await
        .unwrap();
    _ = create_payment(
        &service,
        landlord_id,
        &tenant,
        Some(&property),
        "2024-02-01",
        "CHK-100",
    )
    .await;

    service
        .execute(DeleteTenant { id: tenant.id, landlord_id })
        .await
        .unwrap();

    let payments = service
        .execute(query::payments::List {
            landlord_id,
            filter: read::payment::list::Filter::default(),
        })
        .await
        .unwrap();
    assert!(payments.is_empty());

    let leases = service
        .execute(query::leases::OfProperty {
            property_id: property.id,
            on: date("2024-06-15"),
        })
        .await
        .unwrap();
    assert!(leases.is_empty());
}

#[tokio::test]
async fn deleting_property_cascades_to_its_leases_and_payments() {
    let (service, landlord_id) = setup().await;

    let tenant = create_tenant(&service, landlord_id, "Jane Doe").await;
    let property = create_property(&service, landlord_id, "12 Oak St").await;
    _ = service
        .execute(CreateLease {
            landlord_id,
            tenant_id: tenant.id,
            property_id: property.id,
            lease_start: "2024-01-01".parse().unwrap(),
            lease_end: "2024-12-31".parse().unwrap(),
            rent: 1500.into(),
        })
        .await
        .unwrap();
    _ = create_payment(
        &service,
        landlord_id,
        &tenant,
        Some(&property),
        "2024-02-01",
        "CHK-100",
    )
    .await;
    // Not tied to any property, so it must survive the deletion.
    _ = create_payment(
        &service,
        landlord_id,
        &tenant,
        None,
        "2024-03-01",
        "CHK-101",
    )
    .await;

    service
        .execute(DeleteProperty { id: property.id, landlord_id })
        .await
        .unwrap();

    let leases = service
        .execute(query::leases::OfTenant {
            tenant_id: tenant.id,
            on: date("2024-06-15"),
        })
        .await
        .unwrap();
    assert!(leases.is_empty());

    let payments = service
        .execute(query::payments::List {
            landlord_id,
            filter: read::payment::list::Filter::default(),
        })
        .await
        .unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].ref_num.to_string(), "CHK-101");
}

#[tokio::test]
async fn deleting_lease_leaves_tenant_and_property_intact() {
    let (service, landlord_id) = setup().await;

    let tenant = create_tenant(&service, landlord_id, "Jane Doe").await;
    let property = create_property(&service, landlord_id, "12 Oak St").await;
    let lease = service
        .execute(CreateLease {
            landlord_id,
            tenant_id: tenant.id,
            property_id: property.id,
            lease_start: "2024-01-01".parse().unwrap(),
            lease_end: "2024-12-31".parse().unwrap(),
            rent: 1500.into(),
        })
        .await
        .unwrap();

    service
        .execute(DeleteLease { id: lease.id, landlord_id })
        .await
        .unwrap();

    let view = service
        .execute(query::tenant::ById {
            id: tenant.id,
            landlord_id,
            on: date("2024-06-15"),
        })
        .await
        .unwrap();
    assert!(view.leases.is_empty());

    let view = service
        .execute(query::property::ById {
            id: property.id,
            landlord_id,
            on: date("2024-06-15"),
        })
        .await
        .unwrap();
    assert!(view.leases.is_empty());
}

#[tokio::test]
async fn payments_list_is_filtered_and_sorted_newest_first() {
    let (service, landlord_id) = setup().await;

    let jane = create_tenant(&service, landlord_id, "Jane Doe").await;
    let john = create_tenant(&service, landlord_id, "John Smith").await;
    _ = create_payment(&service, landlord_id, &jane, None, "2024-02-01", "CHK-100")
        .await;
    _ = create_payment(&service, landlord_id, &john, None, "2024-04-01", "CHK-200")
        .await;
    _ = create_payment(&service, landlord_id, &jane, None, "2024-03-01", "ACH-300")
        .await;

    let all = service
        .execute(query::payments::List {
            landlord_id,
            filter: read::payment::list::Filter::default(),
        })
        .await
        .unwrap();
    let refs = all.iter().map(|p| p.ref_num.to_string()).collect::<Vec<_>>();
    assert_eq!(refs, ["CHK-200", "ACH-300", "CHK-100"]);

    // Keyword matches reference numbers and tenant names alike.
    let by_keyword = service
        .execute(query::payments::List {
            landlord_id,
            filter: read::payment::list::Filter {
                keyword: Some("jane".into()),
                ..read::payment::list::Filter::default()
            },
        })
        .await
        .unwrap();
    assert_eq!(by_keyword.len(), 2);

    let by_date = service
        .execute(query::payments::List {
            landlord_id,
            filter: read::payment::list::Filter {
                date: Some("2024-02-15/2024-03-15".parse().unwrap()),
                ..read::payment::list::Filter::default()
            },
        })
        .await
        .unwrap();
    assert_eq!(by_date.len(), 1);
    assert_eq!(by_date[0].ref_num.to_string(), "ACH-300");
}

#[tokio::test]
async fn tenants_search_covers_name_phone_and_email() {
    let (service, landlord_id) = setup().await;

    _ = service
        .execute(CreateTenant {
            landlord_id,
            full_name: "Jane Doe".parse().unwrap(),
            phone_number: Some("555-0101".parse().unwrap()),
            email: Some("jane@example.com".parse().unwrap()),
        })
        .await
        .unwrap();
    _ = create_tenant(&service, landlord_id, "John Smith").await;

    let found = service
        .execute(query::tenants::List {
            landlord_id,
            filter: read::tenant::list::Filter { search: Some("0101".into()) },
            on: date("2024-06-15"),
        })
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].full_name.to_string(), "Jane Doe");

    let table = service
        .execute(query::tenants::Table { landlord_id })
        .await
        .unwrap();
    assert_eq!(table.len(), 2);
}

#[tokio::test]
async fn tenant_listings_are_scoped_to_the_landlord() {
    let (service, landlord_id) = setup().await;
    let other = Landlord { id: landlord::Id::new() };
    service.database().execute(Insert(other)).await.unwrap();

    let jane = create_tenant(&service, landlord_id, "Jane Doe").await;
    let john = create_tenant(&service, other.id, "John Smith").await;

    let listed = service
        .execute(query::tenants::List {
            landlord_id,
            filter: read::tenant::list::Filter::default(),
            on: date("2024-06-15"),
        })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, jane.id);

    let listed = service
        .execute(query::tenants::List {
            landlord_id: other.id,
            filter: read::tenant::list::Filter::default(),
            on: date("2024-06-15"),
        })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, john.id);

    // Table mode is scoped the same way.
    let table = service
        .execute(query::tenants::Table { landlord_id })
        .await
        .unwrap();
    assert_eq!(table.len(), 1);
    assert!(table.contains_key(&jane.id));
    assert!(!table.contains_key(&john.id));
}

#[tokio::test]
async fn payment_kinds_are_listed_with_stable_ids() {
    let (service, _) = setup().await;

    let kinds = service.execute(query::payment_kinds::List).await.unwrap();
    assert_eq!(kinds.len(), 4);
    assert_eq!(kinds.get(&3).map(String::as_str), Some("Credit Card"));
}
