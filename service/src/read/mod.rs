//! Read entities definitions.
//!
//! Response shapes are built here as separate view structs, so derived
//! annotations (like lease activity) never leak back into the stored
//! entities.

pub mod lease;
pub mod payment;
pub mod property;
pub mod tenant;

pub use self::lease::{IsActive, LeaseView};
