//! [`Query`] collection resolving [`Lease`]s of an entity.

use common::{
    operations::{By, Select},
    Date,
};
use tracerr::Traced;

use crate::{
    domain::{property, tenant, Lease},
    infra::{database, Database},
    read::{self, LeaseView},
    Service,
};

use super::Query;

/// [`Query`] resolving all [`Lease`]s of a [`Tenant`], each annotated with
/// its activity on the provided [`Date`].
///
/// [`Tenant`]: crate::domain::Tenant
#[derive(Clone, Copy, Debug)]
pub struct OfTenant {
    /// ID of the [`Tenant`] to resolve [`Lease`]s of.
    ///
    /// [`Tenant`]: crate::domain::Tenant
    pub tenant_id: tenant::Id,

    /// [`Date`] to compute the activity on (normally "today").
    pub on: Date,
}

impl<Db> Query<OfTenant> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Lease>, tenant::Id>>,
        Ok = Vec<Lease>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<LeaseView>;
    type Err = Traced<database::Error>;

    async fn execute(&self, query: OfTenant) -> Result<Self::Ok, Self::Err> {
        let OfTenant { tenant_id, on } = query;

        let leases = self
            .database()
            .execute(Select(By::<Vec<Lease>, _>::new(tenant_id)))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(read::lease::resolve(leases, on))
    }
}

/// [`Query`] resolving all [`Lease`]s of a [`Property`], each annotated with
/// its activity on the provided [`Date`].
///
/// [`Property`]: crate::domain::Property
#[derive(Clone, Copy, Debug)]
pub struct OfProperty {
    /// ID of the [`Property`] to resolve [`Lease`]s of.
    ///
    /// [`Property`]: crate::domain::Property
    pub property_id: property::Id,

    /// [`Date`] to compute the activity on (normally "today").
    pub on: Date,
}

impl<Db> Query<OfProperty> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Lease>, property::Id>>,
        Ok = Vec<Lease>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<LeaseView>;
    type Err = Traced<database::Error>;

    async fn execute(&self, query: OfProperty) -> Result<Self::Ok, Self::Err> {
        let OfProperty { property_id, on } = query;

        let leases = self
            .database()
            .execute(Select(By::<Vec<Lease>, _>::new(property_id)))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(read::lease::resolve(leases, on))
    }
}
