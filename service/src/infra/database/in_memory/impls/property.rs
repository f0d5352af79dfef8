//! [`Property`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{landlord, property, Property},
    infra::{database, database::in_memory, Database, InMemory},
};

impl Database<Insert<Property>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(property): Insert<Property>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        _ = state.properties.insert(property.id, property);
        Ok(())
    }
}

impl Database<Update<Property>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(property): Update<Property>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        let row = state.properties.get_mut(&property.id).ok_or_else(|| {
            tracerr::new!(database::Error::from(in_memory::Error::MissingRow {
                table: "properties",
            }))
        })?;
        *row = property;
        Ok(())
    }
}

impl Database<Delete<By<Property, property::Id>>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    /// Deletes the [`Property`], cascading to the leases and payments
    /// referencing it.
    async fn execute(
        &self,
        Delete(by): Delete<By<Property, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        if state.properties.remove(&id).is_none() {
            return Err(tracerr::new!(database::Error::from(
                in_memory::Error::MissingRow { table: "properties" }
            )));
        }

        let leases_before = state.leases.len();
        state.leases.retain(|_, l| l.property_id != id);
        let payments_before = state.payments.len();
        state.payments.retain(|_, p| p.property_id != Some(id));
        log::debug!(
            "`Property(id: {id})` deleted, cascaded {} leases and {} payments",
            leases_before - state.leases.len(),
            payments_before - state.payments.len(),
        );

        Ok(())
    }
}

impl Database<Select<By<Option<Property>, property::Id>>> for InMemory {
    type Ok = Option<Property>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        Ok(state.properties.get(&by.into_inner()).cloned())
    }
}

impl Database<Select<By<Vec<Property>, landlord::Id>>> for InMemory {
    type Ok = Vec<Property>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Property>, landlord::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let landlord_id = by.into_inner();
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        Ok(state
            .properties
            .values()
            .filter(|p| p.landlord_id == landlord_id)
            .cloned()
            .collect())
    }
}
