//! [`Command`] for deleting a [`Payment`].

use common::{
    operations::{By, Delete, Select},
    ErrorKind,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{landlord, payment, Owned as _, Payment},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Payment`].
#[derive(Clone, Copy, Debug)]
pub struct DeletePayment {
    /// ID of the [`Payment`] to delete.
    pub id: payment::Id,

    /// ID of the [`Landlord`] performing the deletion.
    ///
    /// [`Landlord`]: crate::domain::Landlord
    pub landlord_id: landlord::Id,
}

impl<Db> Command<DeletePayment> for Service<Db>
where
    Db: Database<
            Select<By<Option<Payment>, payment::Id>>,
            Ok = Option<Payment>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Payment, payment::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeletePayment) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeletePayment { id, landlord_id } = cmd;

        _ = self
            .database()
            .execute(Select(By::<Option<Payment>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .and_then(|p| p.owned_by(landlord_id))
            .ok_or(E::PaymentNotExists(id))
            .map_err(tracerr::wrap!())?;

        self.database()
            .execute(Delete(By::<Payment, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(())
    }
}

/// Error of [`DeletePayment`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Payment`] doesn't exist.
    #[display("`Payment(id: {_0})` does not exist")]
    #[from(ignore)]
    PaymentNotExists(#[error(not(source))] payment::Id),
}

impl ExecutionError {
    /// Returns the [`ErrorKind`] of this [`ExecutionError`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Db(e) => e.kind(),
            Self::PaymentNotExists(_) => ErrorKind::NotFound,
        }
    }
}
