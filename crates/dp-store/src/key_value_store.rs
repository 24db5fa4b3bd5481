use crate::StoreResult;

/// Durable string key/value storage the cache is layered on.
///
/// A successful `set` or `remove` must be visible to the very next `get`.
/// Implementations that fail to persist should still apply the change to
/// their in-memory view before returning the error.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    fn remove(&mut self, key: &str) -> StoreResult<()>;
}
