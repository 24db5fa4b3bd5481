//! Local cache store for the profile panel.
//!
//! `CacheStore` exposes one typed accessor per slot over an injected
//! [`KeyValueStore`]. Reads never fail: a missing or undecodable value is
//! reported as absent. Writes update the backing store synchronously and
//! only log when persisting fails.

pub(crate) mod cache_store;
pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod key_value_store;
pub(crate) mod memory_store;
pub(crate) mod slot;

#[cfg(test)]
mod tests;

pub use cache_store::CacheStore;
pub use error::{Result as StoreResult, StoreError};
pub use file_store::{FileStore, backup_corrupted};
pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryStore;
pub use slot::Slot;
