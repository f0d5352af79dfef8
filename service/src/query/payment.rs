//! [`Query`] collection related to a single [`Payment`].

use common::{
    operations::{By, Select},
    ErrorKind,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{landlord, payment, tenant, Owned as _, Payment, Tenant},
    infra::{database, Database},
    read,
    Service,
};

use super::Query;

/// [`Query`] of a [`Payment`] by its [`payment::Id`], projected with its
/// [`Tenant`] record.
#[derive(Clone, Copy, Debug)]
pub struct ById {
    /// ID of the [`Payment`] to query.
    pub id: payment::Id,

    /// ID of the [`Landlord`] performing the query.
    ///
    /// [`Landlord`]: crate::domain::Landlord
    pub landlord_id: landlord::Id,
}

impl<Db> Query<ById> for Service<Db>
where
    Db: Database<
            Select<By<Option<Payment>, payment::Id>>,
            Ok = Option<Payment>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Tenant>, tenant::Id>>,
            Ok = Option<Tenant>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = read::payment::PaymentView;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, query: ById) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ById { id, landlord_id } = query;

        let payment = self
            .database()
            .execute(Select(By::<Option<Payment>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .and_then(|p| p.owned_by(landlord_id))
            .ok_or(E::PaymentNotExists(id))
            .map_err(tracerr::wrap!())?;

        // The referenced `Tenant` row cannot be missing while the `Payment`
        // row exists: deleting a `Tenant` cascades to its payments.
        let tenant = self
            .database()
            .execute(Select(By::<Option<Tenant>, _>::new(payment.tenant_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenantMissing(payment.tenant_id))
            .map_err(tracerr::wrap!())?;

        Ok(read::payment::PaymentView::new(payment, tenant))
    }
}

/// Error of [`ById`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Payment`] doesn't exist.
    #[display("`Payment(id: {_0})` does not exist")]
    #[from(ignore)]
    PaymentNotExists(#[error(not(source))] payment::Id),

    /// Referenced [`Tenant`] row is gone, meaning the store lost referential
    /// integrity.
    #[display("`Tenant(id: {_0})` referenced by a `Payment` is missing")]
    #[from(ignore)]
    TenantMissing(#[error(not(source))] tenant::Id),
}

impl ExecutionError {
    /// Returns the [`ErrorKind`] of this [`ExecutionError`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Db(e) => e.kind(),
            Self::PaymentNotExists(_) => ErrorKind::NotFound,
            Self::TenantMissing(_) => ErrorKind::Internal,
        }
    }
}
