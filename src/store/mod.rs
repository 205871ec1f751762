//! Account store
//!
//! Maps usernames to account records, with load-from and persist-to a
//! durable flat-file representation. Every engine operation runs a full
//! load, mutate in memory, save cycle; the store is exclusively owned by
//! the operation executing it. No cross-process locking is provided.

pub mod backend;
pub mod file;
pub mod format;

pub use backend::{AccountMap, MemoryStore, StoreBackend};
pub use file::FileStore;
