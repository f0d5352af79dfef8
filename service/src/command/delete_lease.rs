//! [`Command`] for deleting a [`Lease`].

use common::{
    operations::{By, Delete, Select},
    ErrorKind,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{landlord, lease, property, Lease, Owned as _, Property},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Lease`].
///
/// Ownership is checked through the [`Property`] the [`Lease`] is for, as
/// the [`Lease`] itself carries no landlord reference.
#[derive(Clone, Copy, Debug)]
pub struct DeleteLease {
    /// ID of the [`Lease`] to delete.
    pub id: lease::Id,

    /// ID of the [`Landlord`] performing the deletion.
    ///
    /// [`Landlord`]: crate::domain::Landlord
    pub landlord_id: landlord::Id,
}

impl<Db> Command<DeleteLease> for Service<Db>
where
    Db: Database<
            Select<By<Option<Lease>, lease::Id>>,
            Ok = Option<Lease>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Lease, lease::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteLease) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteLease { id, landlord_id } = cmd;

        let lease = self
            .database()
            .execute(Select(By::<Option<Lease>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::LeaseNotExists(id))
            .map_err(tracerr::wrap!())?;

        // A foreign-owned lease is indistinguishable from an absent one.
        _ = self
            .database()
            .execute(Select(By::<Option<Property>, _>::new(lease.property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .and_then(|p| p.owned_by(landlord_id))
            .ok_or(E::LeaseNotExists(id))
            .map_err(tracerr::wrap!())?;

        self.database()
            .execute(Delete(By::<Lease, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(())
    }
}

/// Error of [`DeleteLease`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Lease`] doesn't exist.
    #[display("`Lease(id: {_0})` does not exist")]
    #[from(ignore)]
    LeaseNotExists(#[error(not(source))] lease::Id),
}

impl ExecutionError {
    /// Returns the [`ErrorKind`] of this [`ExecutionError`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Db(e) => e.kind(),
            Self::LeaseNotExists(_) => ErrorKind::NotFound,
        }
    }
}
