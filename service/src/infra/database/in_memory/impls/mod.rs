//! Per-entity [`Database`] implementations of the [`InMemory`] store.
//!
//! [`Database`]: crate::infra::Database
//! [`InMemory`]: super::InMemory

mod landlord;
mod lease;
mod payment;
mod property;
mod tenant;
