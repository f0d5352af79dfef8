//! [`Command`] for creating a new [`Property`].

use common::{
    operations::{By, Insert, Select},
    ErrorKind,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::property::{City, PostalCode, State, Street};
use crate::{
    domain::{landlord, property, Landlord, Property},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Property`].
#[derive(Clone, Debug)]
pub struct CreateProperty {
    /// ID of the [`Landlord`] the new [`Property`] belongs to.
    pub landlord_id: landlord::Id,

    /// [`Street`] of the new [`Property`].
    pub street: property::Street,

    /// [`City`] of the new [`Property`].
    pub city: property::City,

    /// [`State`] of the new [`Property`].
    pub state: property::State,

    /// [`PostalCode`] of the new [`Property`].
    pub postal_code: property::PostalCode,
}

impl<Db> Command<CreateProperty> for Service<Db>
where
    Db: Database<
            Select<By<Option<Landlord>, landlord::Id>>,
            Ok = Option<Landlord>,
            Err = Traced<database::Error>,
        > + Database<Insert<Property>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Property;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateProperty { landlord_id, street, city, state, postal_code } =
            cmd;

        _ = self
            .database()
            .execute(Select(By::<Option<Landlord>, _>::new(landlord_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::LandlordNotExists(landlord_id))
            .map_err(tracerr::wrap!())?;

        let property = Property {
            id: property::Id::new(),
            street,
            city,
            state,
            postal_code,
            landlord_id,
        };

        self.database()
            .execute(Insert(property.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(property)
    }
}

/// Error of [`CreateProperty`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Landlord`] doesn't exist.
    #[display("`Landlord(id: {_0})` does not exist")]
    #[from(ignore)]
    LandlordNotExists(#[error(not(source))] landlord::Id),
}

impl ExecutionError {
    /// Returns the [`ErrorKind`] of this [`ExecutionError`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Db(e) => e.kind(),
            Self::LandlordNotExists(_) => ErrorKind::NotFound,
        }
    }
}
