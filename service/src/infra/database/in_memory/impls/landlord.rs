//! [`Landlord`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{landlord, Landlord},
    infra::{database, Database, InMemory},
};

impl Database<Insert<Landlord>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(landlord): Insert<Landlord>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        _ = state.landlords.insert(landlord.id, landlord);
        Ok(())
    }
}

impl Database<Select<By<Option<Landlord>, landlord::Id>>> for InMemory {
    type Ok = Option<Landlord>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Landlord>, landlord::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        Ok(state.landlords.get(&by.into_inner()).copied())
    }
}
