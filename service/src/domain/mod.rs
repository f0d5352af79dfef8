//! Domain entities definitions.

pub mod landlord;
pub mod lease;
pub mod payment;
pub mod property;
pub mod tenant;

pub use self::{
    landlord::Landlord, lease::Lease, payment::Payment, property::Property,
    tenant::Tenant,
};

/// Entity owned by a single [`Landlord`].
///
/// Every entity fetched on behalf of a landlord passes through
/// [`Owned::owned_by()`], so the ownership check lives in one place instead
/// of being repeated per operation.
pub trait Owned: Sized {
    /// Returns the ID of the owning [`Landlord`].
    fn landlord_id(&self) -> landlord::Id;

    /// Returns this entity back only when it's owned by the provided
    /// [`Landlord`].
    ///
    /// A foreign-owned entity is indistinguishable from an absent one.
    #[must_use]
    fn owned_by(self, landlord_id: landlord::Id) -> Option<Self> {
        (self.landlord_id() == landlord_id).then_some(self)
    }
}
