//! [`Query`] collection related to multiple [`Payment`]s.

use common::{
    operations::{By, Select},
    ErrorKind,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{landlord, tenant, Payment, Tenant},
    infra::{database, Database},
    read,
    Service,
};

use super::Query;

/// [`Query`] of all the [`Payment`]s belonging to a [`Landlord`], newest
/// first, optionally narrowed by a [`Filter`].
///
/// [`Filter`]: read::payment::list::Filter
/// [`Landlord`]: crate::domain::Landlord
#[derive(Clone, Debug)]
pub struct List {
    /// ID of the [`Landlord`] performing the query.
    ///
    /// [`Landlord`]: crate::domain::Landlord
    pub landlord_id: landlord::Id,

    /// [`Filter`] to narrow the queried [`Payment`]s with.
    ///
    /// [`Filter`]: read::payment::list::Filter
    pub filter: read::payment::list::Filter,
}

impl<Db> Query<List> for Service<Db>
where
    Db: Database<
            Select<By<Vec<Payment>, landlord::Id>>,
            Ok = Vec<Payment>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Tenant>, tenant::Id>>,
            Ok = Option<Tenant>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Vec<read::payment::PaymentView>;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, query: List) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let List { landlord_id, filter } = query;

        let payments = self
            .database()
            .execute(Select(By::<Vec<Payment>, _>::new(landlord_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut views = Vec::with_capacity(payments.len());
        for payment in payments {
            let tenant = self
                .database()
                .execute(Select(By::<Option<Tenant>, _>::new(
                    payment.tenant_id,
                )))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::TenantMissing(payment.tenant_id))
                .map_err(tracerr::wrap!())?;

            if filter.matches(&payment, &tenant) {
                views.push(read::payment::PaymentView::new(payment, tenant));
            }
        }
        read::payment::list::sort(&mut views);

        Ok(views)
    }
}

/// Error of [`List`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

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
            Self::TenantMissing(_) => ErrorKind::Internal,
        }
    }
}
