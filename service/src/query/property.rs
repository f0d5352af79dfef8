//! [`Query`] collection related to a single [`Property`].

use common::{
    operations::{By, Select},
    Date, ErrorKind,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{landlord, property, Lease, Owned as _, Property},
    infra::{database, Database},
    read,
    Service,
};

use super::{leases, Query};

/// [`Query`] of a [`Property`] by its [`property::Id`], projected with its
/// resolved leases.
#[derive(Clone, Copy, Debug)]
pub struct ById {
    /// ID of the [`Property`] to query.
    pub id: property::Id,

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
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Lease>, property::Id>>,
            Ok = Vec<Lease>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = read::property::WithLeases;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, query: ById) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ById { id, landlord_id, on } = query;

        let property = self
            .database()
            .execute(Select(By::<Option<Property>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .and_then(|p| p.owned_by(landlord_id))
            .ok_or(E::PropertyNotExists(id))
            .map_err(tracerr::wrap!())?;

        let leases = self
            .execute(leases::OfProperty { property_id: id, on })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(read::property::WithLeases::new(property, leases))
    }
}

/// Error of [`ById`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Property`] doesn't exist.
    #[display("`Property(id: {_0})` does not exist")]
    #[from(ignore)]
    PropertyNotExists(#[error(not(source))] property::Id),
}

impl ExecutionError {
    /// Returns the [`ErrorKind`] of this [`ExecutionError`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Db(e) => e.kind(),
            Self::PropertyNotExists(_) => ErrorKind::NotFound,
        }
    }
}
