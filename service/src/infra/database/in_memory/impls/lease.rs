//! [`Lease`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{lease, property, tenant, Lease},
    infra::{database, database::in_memory, Database, InMemory},
};

impl Database<Insert<Lease>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(lease): Insert<Lease>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        _ = state.leases.insert(lease.id, lease);
        Ok(())
    }
}

impl Database<Delete<By<Lease, lease::Id>>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Lease, lease::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        if state.leases.remove(&by.into_inner()).is_none() {
            return Err(tracerr::new!(database::Error::from(
                in_memory::Error::MissingRow { table: "leases" }
            )));
        }
        Ok(())
    }
}

impl Database<Select<By<Option<Lease>, lease::Id>>> for InMemory {
    type Ok = Option<Lease>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Lease>, lease::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        Ok(state.leases.get(&by.into_inner()).copied())
    }
}

impl Database<Select<By<Vec<Lease>, tenant::Id>>> for InMemory {
    type Ok = Vec<Lease>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Lease>, tenant::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let tenant_id = by.into_inner();
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        Ok(state
            .leases
            .values()
            .filter(|l| l.tenant_id == tenant_id)
            .copied()
            .collect())
    }
}

impl Database<Select<By<Vec<Lease>, property::Id>>> for InMemory {
    type Ok = Vec<Lease>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Lease>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let property_id = by.into_inner();
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        Ok(state
            .leases
            .values()
            .filter(|l| l.property_id == property_id)
            .copied()
            .collect())
    }
}
