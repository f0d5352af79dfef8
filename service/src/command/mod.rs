//! [`Command`] definition.

pub mod create_lease;
pub mod create_payment;
pub mod create_property;
pub mod create_tenant;
pub mod delete_lease;
pub mod delete_payment;
pub mod delete_property;
pub mod delete_tenant;
pub mod update_payment;
pub mod update_property;
pub mod update_tenant;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_lease::CreateLease, create_payment::CreatePayment,
    create_property::CreateProperty, create_tenant::CreateTenant,
    delete_lease::DeleteLease, delete_payment::DeletePayment,
    delete_property::DeleteProperty, delete_tenant::DeleteTenant,
    update_payment::UpdatePayment, update_property::UpdateProperty,
    update_tenant::UpdateTenant,
};
