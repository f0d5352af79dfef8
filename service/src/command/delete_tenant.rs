//! [`Command`] for deleting a [`Tenant`].

use common::{
    operations::{By, Delete, Select},
    ErrorKind,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{landlord, tenant, Owned as _, Tenant},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Tenant`], along with all its leases and
/// payments.
#[derive(Clone, Copy, Debug)]
pub struct DeleteTenant {
    /// ID of the [`Tenant`] to delete.
    pub id: tenant::Id,

    /// ID of the [`Landlord`] performing the deletion.
    ///
    /// [`Landlord`]: crate::domain::Landlord
    pub landlord_id: landlord::Id,
}

impl<Db> Command<DeleteTenant> for Service<Db>
where
    Db: Database<
            Select<By<Option<Tenant>, tenant::Id>>,
            Ok = Option<Tenant>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Tenant, tenant::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteTenant) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteTenant { id, landlord_id } = cmd;

        _ = self
            .database()
            .execute(Select(By::<Option<Tenant>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .and_then(|t| t.owned_by(landlord_id))
            .ok_or(E::TenantNotExists(id))
            .map_err(tracerr::wrap!())?;

        self.database()
            .execute(Delete(By::<Tenant, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(())
    }
}

/// Error of [`DeleteTenant`] [`Command`] execution.
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
