//! Unit tests for the cache store.
//!
//! These tests can access crate internals via `use crate::`.


use crate::{KeyValueStore, StoreError, StoreResult};

use std::path::PathBuf;

/// Backend whose every operation fails, for exercising the swallow paths.
pub(crate) struct FailingStore;

impl FailingStore {
    fn error() -> StoreError {
        StoreError::file_write(
            PathBuf::from("/unwritable/profile.json"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        )
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(Self::error())
    }

    fn set(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(Self::error())
    }

    fn remove(&mut self, _key: &str) -> StoreResult<()> {
        Err(Self::error())
    }
}
