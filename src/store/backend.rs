//! Store backend abstraction
//!
//! The engine operates on a `StoreBackend` rather than a file path, so
//! tests and embedders can substitute an in-memory store.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::account::AccountRecord;
use crate::error::StoreError;

/// The in-memory shape of the store. Keys are sorted, so persisted order
/// is deterministic across saves.
pub type AccountMap = BTreeMap<String, AccountRecord>;

/// Durable storage for the account map.
pub trait StoreBackend {
    /// Loads the full account map. An absent store yields an empty map,
    /// not an error (first-run default).
    fn load(&self) -> Result<AccountMap, StoreError>;

    /// Persists the full account map, replacing any previous contents.
    fn save(&self, accounts: &AccountMap) -> Result<(), StoreError>;
}

impl<S: StoreBackend + ?Sized> StoreBackend for &S {
    fn load(&self) -> Result<AccountMap, StoreError> {
        (**self).load()
    }

    fn save(&self, accounts: &AccountMap) -> Result<(), StoreError> {
        (**self).save(accounts)
    }
}

/// In-memory backend for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: RefCell<AccountMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryStore {
    fn load(&self) -> Result<AccountMap, StoreError> {
        Ok(self.accounts.borrow().clone())
    }

    fn save(&self, accounts: &AccountMap) -> Result<(), StoreError> {
        *self.accounts.borrow_mut() = accounts.clone();
        Ok(())
    }
}
