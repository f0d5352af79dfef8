//! [`Tenant`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{landlord, tenant, Tenant},
    infra::{database, database::in_memory, Database, InMemory},
};

impl Database<Insert<Tenant>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(tenant): Insert<Tenant>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        _ = state.tenants.insert(tenant.id, tenant);
        Ok(())
    }
}

impl Database<Update<Tenant>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(tenant): Update<Tenant>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        let row = state.tenants.get_mut(&tenant.id).ok_or_else(|| {
            tracerr::new!(database::Error::from(in_memory::Error::MissingRow {
                table: "tenants",
            }))
        })?;
        *row = tenant;
        Ok(())
    }
}

impl Database<Delete<By<Tenant, tenant::Id>>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    /// Deletes the [`Tenant`], cascading to the leases and payments
    /// referencing it.
    async fn execute(
        &self,
        Delete(by): Delete<By<Tenant, tenant::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        if state.tenants.remove(&id).is_none() {
            return Err(tracerr::new!(database::Error::from(
                in_memory::Error::MissingRow { table: "tenants" }
            )));
        }

        let leases_before = state.leases.len();
        state.leases.retain(|_, l| l.tenant_id != id);
        let payments_before = state.payments.len();
        state.payments.retain(|_, p| p.tenant_id != id);
        log::debug!(
            "`Tenant(id: {id})` deleted, cascaded {} leases and {} payments",
            leases_before - state.leases.len(),
            payments_before - state.payments.len(),
        );

        Ok(())
    }
}

impl Database<Select<By<Option<Tenant>, tenant::Id>>> for InMemory {
    type Ok = Option<Tenant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Tenant>, tenant::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        Ok(state.tenants.get(&by.into_inner()).cloned())
    }
}

impl Database<Select<By<Vec<Tenant>, landlord::Id>>> for InMemory {
    type Ok = Vec<Tenant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Tenant>, landlord::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let landlord_id = by.into_inner();
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        Ok(state
            .tenants
            .values()
            .filter(|t| t.landlord_id == landlord_id)
            .cloned()
            .collect())
    }
}
