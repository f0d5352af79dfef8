//! [`Command`] for recording a new [`Payment`].

use common::{
    operations::{By, Insert, Select},
    Amount, ErrorKind,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::payment::{Date, Kind, RefNum};
use crate::{
    domain::{
        landlord, payment, property, tenant, Landlord, Owned as _, Payment,
        Property, Tenant,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for recording a new [`Payment`].
#[derive(Clone, Debug)]
pub struct CreatePayment {
    /// ID of the [`Landlord`] recording the [`Payment`].
    pub landlord_id: landlord::Id,

    /// ID of the [`Tenant`] the [`Payment`] was received from.
    pub tenant_id: tenant::Id,

    /// ID of the [`Property`] the [`Payment`] is for, if any.
    pub property_id: Option<property::Id>,

    /// [`Date`] the [`Payment`] was received on.
    pub date: payment::Date,

    /// [`Amount`] of the [`Payment`].
    pub amount: Amount,

    /// [`RefNum`] identifying the [`Payment`] externally.
    pub ref_num: payment::RefNum,

    /// [`Kind`] of the [`Payment`].
    pub kind: payment::Kind,
}

impl<Db> Command<CreatePayment> for Service<Db>
where
    Db: Database<
            Select<By<Option<Landlord>, landlord::Id>>,
            Ok = Option<Landlord>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Tenant>, tenant::Id>>,
            Ok = Option<Tenant>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<Insert<Payment>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Payment;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreatePayment) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreatePayment {
            landlord_id,
            tenant_id,
            property_id,
            date,
            amount,
            ref_num,
            kind,
        } = cmd;

        _ = self
            .database()
            .execute(Select(By::<Option<Landlord>, _>::new(landlord_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::LandlordNotExists(landlord_id))
            .map_err(tracerr::wrap!())?;

        _ = self
            .database()
            .execute(Select(By::<Option<Tenant>, _>::new(tenant_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .and_then(|t| t.owned_by(landlord_id))
            .ok_or(E::TenantNotExists(tenant_id))
            .map_err(tracerr::wrap!())?;

        if let Some(property_id) = property_id {
            _ = self
                .database()
                .execute(Select(By::<Option<Property>, _>::new(property_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .and_then(|p| p.owned_by(landlord_id))
                .ok_or(E::PropertyNotExists(property_id))
                .map_err(tracerr::wrap!())?;
        }

        let payment = Payment {
            id: payment::Id::new(),
            date,
            amount,
            ref_num,
            tenant_id,
            property_id,
            kind,
            landlord_id,
        };

        self.database()
            .execute(Insert(payment.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(payment)
    }
}

/// Error of [`CreatePayment`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Landlord`] doesn't exist.
    #[display("`Landlord(id: {_0})` does not exist")]
    #[from(ignore)]
    LandlordNotExists(#[error(not(source))] landlord::Id),

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
            Self::LandlordNotExists(_)
            | Self::TenantNotExists(_)
            | Self::PropertyNotExists(_) => ErrorKind::NotFound,
        }
    }
}
