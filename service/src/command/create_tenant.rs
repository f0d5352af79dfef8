//! [`Command`] for creating a new [`Tenant`].

use common::{
    operations::{By, Insert, Select},
    ErrorKind,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::tenant::{Email, FullName, PhoneNumber};
use crate::{
    domain::{landlord, tenant, Landlord, Tenant},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Tenant`].
#[derive(Clone, Debug)]
pub struct CreateTenant {
    /// ID of the [`Landlord`] the new [`Tenant`] belongs to.
    pub landlord_id: landlord::Id,

    /// [`FullName`] of the new [`Tenant`].
    pub full_name: tenant::FullName,

    /// [`PhoneNumber`] of the new [`Tenant`], if any.
    pub phone_number: Option<tenant::PhoneNumber>,

    /// [`Email`] of the new [`Tenant`], if any.
    pub email: Option<tenant::Email>,
}

impl<Db> Command<CreateTenant> for Service<Db>
where
    Db: Database<
            Select<By<Option<Landlord>, landlord::Id>>,
            Ok = Option<Landlord>,
            Err = Traced<database::Error>,
        > + Database<Insert<Tenant>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Tenant;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateTenant) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateTenant { landlord_id, full_name, phone_number, email } = cmd;

        _ = self
            .database()
            .execute(Select(By::<Option<Landlord>, _>::new(landlord_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::LandlordNotExists(landlord_id))
            .map_err(tracerr::wrap!())?;

        let tenant = Tenant {
            id: tenant::Id::new(),
            full_name,
            phone_number,
            email,
            landlord_id,
        };

        self.database()
            .execute(Insert(tenant.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tenant)
    }
}

/// Error of [`CreateTenant`] [`Command`] execution.
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
