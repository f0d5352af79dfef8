//! [`Command`] for creating a new [`Lease`].

use common::{
    operations::{By, Insert, Select},
    Date, ErrorKind,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::lease::{EndDate, Rent, StartDate};
use crate::{
    domain::{
        landlord, lease, property, tenant, Lease, Owned as _, Property, Tenant,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Lease`] tying a [`Tenant`] to a
/// [`Property`].
#[derive(Clone, Copy, Debug)]
pub struct CreateLease {
    /// ID of the [`Landlord`] creating the [`Lease`].
    ///
    /// [`Landlord`]: crate::domain::Landlord
    pub landlord_id: landlord::Id,

    /// ID of the [`Tenant`] holding the new [`Lease`].
    pub tenant_id: tenant::Id,

    /// ID of the [`Property`] the new [`Lease`] is for.
    pub property_id: property::Id,

    /// [`StartDate`] of the new [`Lease`].
    pub lease_start: lease::StartDate,

    /// [`EndDate`] of the new [`Lease`].
    pub lease_end: lease::EndDate,

    /// Monthly [`Rent`] of the new [`Lease`].
    pub rent: lease::Rent,
}

impl<Db> Command<CreateLease> for Service<Db>
where
    Db: Database<
            Select<By<Option<Tenant>, tenant::Id>>,
            Ok = Option<Tenant>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<Insert<Lease>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Lease;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateLease) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateLease {
            landlord_id,
            tenant_id,
            property_id,
            lease_start,
            lease_end,
            rent,
        } = cmd;

        if lease_start.coerce::<()>() > lease_end.coerce() {
            return Err(tracerr::new!(E::InvalidPeriod {
                start: lease_start.coerce(),
                end: lease_end.coerce(),
            }));
        }

        _ = self
            .database()
            .execute(Select(By::<Option<Tenant>, _>::new(tenant_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .and_then(|t| t.owned_by(landlord_id))
            .ok_or(E::TenantNotExists(tenant_id))
            .map_err(tracerr::wrap!())?;

        _ = self
            .database()
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .and_then(|p| p.owned_by(landlord_id))
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())?;

        let lease = Lease {
            id: lease::Id::new(),
            lease_start,
            lease_end,
            rent,
            tenant_id,
            property_id,
        };

        self.database()
            .execute(Insert(lease))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(lease)
    }
}

/// Error of [`CreateLease`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Lease`] period ends before it starts.
    #[display("`Lease` period is invalid: {start} > {end}")]
    InvalidPeriod {
        /// Requested [`StartDate`] of the [`Lease`].
        start: Date,

        /// Requested [`EndDate`] of the [`Lease`].
        end: Date,
    },

    /// [`Tenant`] doesn't exist.
    #[display("`Tenant(id: {_0})` does not exist")]
    #[from(ignore)]
    TenantNotExists(#[error(not(source))] tenant::Id),

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
            Self::InvalidPeriod { .. } => ErrorKind::Validation,
            Self::TenantNotExists(_) | Self::PropertyNotExists(_) => {
                ErrorKind::NotFound
            }
        }
    }
}
