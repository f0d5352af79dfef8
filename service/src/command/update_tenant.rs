//! [`Command`] for updating an existing [`Tenant`].

use common::{
    operations::{By, Select, Update},
    ErrorKind,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::tenant::{Email, FullName, PhoneNumber};
use crate::{
    domain::{landlord, tenant, Owned as _, Tenant},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Tenant`].
#[derive(Clone, Debug)]
pub struct UpdateTenant {
    /// ID of the [`Tenant`] to update.
    pub id: tenant::Id,

    /// ID of the [`Landlord`] performing the update.
    ///
    /// [`Landlord`]: crate::domain::Landlord
    pub landlord_id: landlord::Id,

    /// New [`FullName`] of the [`Tenant`].
    pub full_name: tenant::FullName,

    /// New [`PhoneNumber`] of the [`Tenant`].
    ///
    /// [`None`] clears it.
    pub phone_number: Option<tenant::PhoneNumber>,

    /// New [`Email`] of the [`Tenant`].
    ///
    /// [`None`] clears it.
    pub email: Option<tenant::Email>,
}

impl<Db> Command<UpdateTenant> for Service<Db>
where
    Db: Database<
            Select<By<Option<Tenant>, tenant::Id>>,
            Ok = Option<Tenant>,
            Err = Traced<database::Error>,
        > + Database<Update<Tenant>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Tenant;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateTenant) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateTenant { id, landlord_id, full_name, phone_number, email } =
            cmd;

        let mut tenant = self
            .database()
            .execute(Select(By::<Option<Tenant>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .and_then(|t| t.owned_by(landlord_id))
            .ok_or(E::TenantNotExists(id))
            .map_err(tracerr::wrap!())?;

        tenant.full_name = full_name;
        tenant.phone_number = phone_number;
        tenant.email = email;

        self.database()
            .execute(Update(tenant.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tenant)
    }
}

/// Error of [`UpdateTenant`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Tenant`] doesn't exist.
    #[display("`Tenant(id: {_0})` does not exist")]
    #[from(ignore)]
    TenantNotExists(#[error(not(source))] tenant::Id),
}

impl ExecutionError {
    /// Returns the [`ErrorKind`] of this [`ExecutionError`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Db(e) => e.kind(),
            Self::TenantNotExists(_) => ErrorKind::NotFound,
        }
    }
}
