//! [`Command`] for updating an existing [`Payment`].

use common::{
    operations::{By, Select, Update},
    Amount, ErrorKind,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::payment::{Date, Kind, RefNum};
use crate::{
    domain::{
        landlord, payment, property, tenant, Owned as _, Payment, Property,
        Tenant,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Payment`].
#[derive(Clone, Debug)]
pub struct UpdatePayment {
    /// ID of the [`Payment`] to update.
    pub id: payment::Id,

    /// ID of the [`Landlord`] performing the update.
    ///
    /// [`Landlord`]: crate::domain::Landlord
    pub landlord_id: landlord::Id,

    /// New ID of the [`Tenant`] the [`Payment`] was received from.
    pub tenant_id: tenant::Id,

    /// New ID of the [`Property`] the [`Payment`] is for, if any.
    pub property_id: Option<property::Id>,

    /// New [`Date`] the [`Payment`] was received on.
    pub date: payment::Date,

    /// New [`Amount`] of the [`Payment`].
    pub amount: Amount,

    /// New [`RefNum`] identifying the [`Payment`] externally.
    pub ref_num: payment::RefNum,

    /// New [`Kind`] of the [`Payment`].
    pub kind: payment::Kind,
}

impl<Db> Command<UpdatePayment> for Service<Db>
where
    Db: Database<
            Select<By<Option<Payment>, payment::Id>>,
            Ok = Option<Payment>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Tenant>, tenant::Id>>,
            Ok = Option<Tenant>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<Update<Payment>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Payment;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdatePayment) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdatePayment {
            id,
            landlord_id,
            tenant_id,
            property_id,
            date,
            amount,
            ref_num,
            kind,
        } = cmd;

        let mut payment = self
            .database()
            .execute(Select(By::<Option<Payment>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .and_then(|p| p.owned_by(landlord_id))
            .ok_or(E::PaymentNotExists(id))
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

        payment.tenant_id = tenant_id;
        payment.property_id = property_id;
        payment.date = date;
        payment.amount = amount;
        payment.ref_num = ref_num;
        payment.kind = kind;

        self.database()
            .execute(Update(payment.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(payment)
    }
}

/// Error of [`UpdatePayment`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Payment`] doesn't exist.
    #[display("`Payment(id: {_0})` does not exist")]
    #[from(ignore)]
    PaymentNotExists(#[error(not(source))] payment::Id),

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
            Self::PaymentNotExists(_)
            | Self::TenantNotExists(_)
            | Self::PropertyNotExists(_) => ErrorKind::NotFound,
        }
    }
}
