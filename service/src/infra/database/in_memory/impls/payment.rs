//! [`Payment`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{landlord, payment, Payment},
    infra::{database, database::in_memory, Database, InMemory},
};

impl Database<Insert<Payment>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(payment): Insert<Payment>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        _ = state.payments.insert(payment.id, payment);
        Ok(())
    }
}

impl Database<Update<Payment>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(payment): Update<Payment>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        let row = state.payments.get_mut(&payment.id).ok_or_else(|| {
            tracerr::new!(database::Error::from(in_memory::Error::MissingRow {
                table: "payments",
            }))
        })?;
        *row = payment;
        Ok(())
    }
}

impl Database<Delete<By<Payment, payment::Id>>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Payment, payment::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        if state.payments.remove(&by.into_inner()).is_none() {
            return Err(tracerr::new!(database::Error::from(
                in_memory::Error::MissingRow { table: "payments" }
            )));
        }
        Ok(())
    }
}

impl Database<Select<By<Option<Payment>, payment::Id>>> for InMemory {
    type Ok = Option<Payment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Payment>, payment::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        Ok(state.payments.get(&by.into_inner()).cloned())
    }
}

impl Database<Select<By<Vec<Payment>, landlord::Id>>> for InMemory {
    type Ok = Vec<Payment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Payment>, landlord::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let landlord_id = by.into_inner();
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        Ok(state
            .payments
            .values()
            .filter(|p| p.landlord_id == landlord_id)
            .cloned()
            .collect())
    }
}
