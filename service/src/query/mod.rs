//! [`Query`] definition.

pub mod leases;
pub mod payment;
pub mod payment_kinds;
pub mod payments;
pub mod properties;
pub mod property;
pub mod tenant;
pub mod tenants;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;
