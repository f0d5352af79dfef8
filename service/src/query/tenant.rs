//! [`Query`] collection related to a single [`Tenant`].

use common::{
    operations::{By, Select},
    Date, ErrorKind,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{landlord, tenant, Lease, Owned as _, Tenant},
    infra::{database, Database},
    read,
    Service,
};

use super::{leases, Query};

/// [`Query`] of a [`Tenant`] by its [`tenant::Id`], projected with its
/// resolved leases.
#[derive(Clone, Copy, Debug)]
pub struct ById {
    /// ID of the [`Tenant`] to query.
    pub id: tenant::Id,

    /// ID of the [`Landlord`] performing the query.
    ///
    /// [`Landlord`]: crate::domain::Landlord
    pub landlord_id: landlord::Id,

    /// [`Date`] to compute lease activity on (normally "today").
    pub on: Date,
}

impl<Db> Query<ById> for Service<Db>
where
    Db: Database<
            Select<By<Option<Tenant>, tenant::Id>>,
            Ok = Option<Tenant>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Lease>, tenant::Id>>,
            Ok = Vec<Lease>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = read::tenant::WithLeases;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, query: ById) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ById { id, landlord_id, on } = query;

        let tenant = self
            .database()
            .execute(Select(By::<Option<Tenant>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .and_then(|t| t.owned_by(landlord_id))
            .ok_or(E::TenantNotExists(id))
            .map_err(tracerr::wrap!())?;

        let leases = self
            .execute(leases::OfTenant { tenant_id: id, on })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(read::tenant::WithLeases::new(tenant, leases))
    }
}

/// Error of [`ById`] [`Query`] execution.
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
