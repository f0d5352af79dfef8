//! [`Query`] collection related to the multiple [`Tenant`]s.

use common::{
    operations::{By, Select},
    Date,
};
use tracerr::Traced;

use crate::{
    domain::{landlord, tenant, Lease, Tenant},
    infra::{database, Database},
    read,
    Service,
};

use super::{leases, Query};

/// [`Query`] of all the [`Tenant`]s of a [`Landlord`], search-filtered and
/// projected with their resolved leases.
///
/// [`Landlord`]: crate::domain::Landlord
#[derive(Clone, Debug)]
pub struct List {
    /// ID of the [`Landlord`] performing the query.
    ///
    /// [`Landlord`]: crate::domain::Landlord
    pub landlord_id: landlord::Id,

    /// [`Filter`] to narrow the listing with.
    ///
    /// [`Filter`]: read::tenant::list::Filter
    pub filter: read::tenant::list::Filter,

    /// [`Date`] to compute lease activity on (normally "today").
    pub on: Date,
}

impl<Db> Query<List> for Service<Db>
where
    Db: Database<
            Select<By<Vec<Tenant>, landlord::Id>>,
            Ok = Vec<Tenant>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Lease>, tenant::Id>>,
            Ok = Vec<Lease>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Vec<read::tenant::WithLeases>;
    type Err = Traced<database::Error>;

    async fn execute(&self, query: List) -> Result<Self::Ok, Self::Err> {
        let List {
            landlord_id,
            filter,
            on,
        } = query;

        let mut tenants = self
            .database()
            .execute(Select(By::<Vec<Tenant>, _>::new(landlord_id)))
            .await
            .map_err(tracerr::wrap!())?;
        tenants.retain(|t| filter.matches(t));

        let mut views = Vec::with_capacity(tenants.len());
        for tenant in tenants {
            let leases = self
                .execute(leases::OfTenant {
                    tenant_id: tenant.id,
                    on,
                })
                .await
                .map_err(tracerr::wrap!())?;
            views.push(read::tenant::WithLeases::new(tenant, leases));
        }

        Ok(views)
    }
}

/// [`Query`] of the compact id→name [`read::tenant::Table`] of all the
/// [`Tenant`]s of a [`Landlord`].
///
/// The search filter doesn't apply here: table mode always covers the whole
/// roster.
///
/// [`Landlord`]: crate::domain::Landlord
#[derive(Clone, Copy, Debug)]
pub struct Table {
    /// ID of the [`Landlord`] performing the query.
    ///
    /// [`Landlord`]: crate::domain::Landlord
    pub landlord_id: landlord::Id,
}

impl<Db> Query<Table> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Tenant>, landlord::Id>>,
        Ok = Vec<Tenant>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = read::tenant::Table;
    type Err = Traced<database::Error>;

    async fn execute(&self, query: Table) -> Result<Self::Ok, Self::Err> {
        let tenants = self
            .database()
            .execute(Select(By::<Vec<Tenant>, _>::new(query.landlord_id)))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(tenants.into_iter().map(|t| (t.id, t.full_name)).collect())
    }
}
