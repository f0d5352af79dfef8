//! In-memory [`Database`] implementation.
//!
//! Pins down the record store contract this crate expects (lookup-by-id,
//! filter-by-field and delete cascades) without dragging an actual database
//! in: persistence mechanics belong to an external collaborator.
//!
//! [`Database`]: crate::infra::Database

mod impls;

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use derive_more::{Display, Error as StdError};

use crate::domain::{
    landlord, lease, payment, property, tenant, Landlord, Lease, Payment,
    Property, Tenant,
};

/// In-memory [`Database`] built on [`HashMap`]s.
///
/// Cheaply clonable: clones share the same state.
///
/// [`Database`]: crate::infra::Database
#[derive(Clone, Debug, Default)]
pub struct InMemory(Arc<RwLock<State>>);

/// Tables of an [`InMemory`] store.
#[derive(Debug, Default)]
struct State {
    /// [`Landlord`] records by their IDs.
    landlords: HashMap<landlord::Id, Landlord>,

    /// [`Tenant`] records by their IDs.
    tenants: HashMap<tenant::Id, Tenant>,

    /// [`Property`] records by their IDs.
    properties: HashMap<property::Id, Property>,

    /// [`Lease`] records by their IDs.
    leases: HashMap<lease::Id, Lease>,

    /// [`Payment`] records by their IDs.
    payments: HashMap<payment::Id, Payment>,
}

impl InMemory {
    /// Creates a new empty [`InMemory`] store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires a shared borrow of the tables.
    fn read(&self) -> Result<RwLockReadGuard<'_, State>, Error> {
        self.0.read().map_err(|_| Error::Poisoned)
    }

    /// Acquires an exclusive borrow of the tables.
    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, Error> {
        self.0.write().map_err(|_| Error::Poisoned)
    }
}

/// [`InMemory`] store error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// Updated or deleted row doesn't exist.
    #[display("`{table}` row doesn't exist")]
    MissingRow {
        /// Table the row was expected in.
        table: &'static str,
    },

    /// Another writer panicked while holding the lock.
    #[display("store lock is poisoned")]
    Poisoned,
}
