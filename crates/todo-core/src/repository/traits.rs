//! Repository Layer - Core Traits
//!
//! Defines the abstract key-value interface the todo store sits on.
//! Implementations can use browser `localStorage`, in-memory maps, etc.

use crate::domain::StoreResult;

/// Synchronous string-to-string storage with indexed key enumeration
///
/// Shaped after the Web Storage API. All methods take `&self`;
/// implementations use interior mutability where they need it.
pub trait KeyValueStorage {
    /// Number of keys currently stored
    fn len(&self) -> StoreResult<usize>;

    /// Key at `index`, or `None` past the end
    fn key(&self, index: usize) -> StoreResult<Option<String>>;

    /// Value stored under `key`
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// All keys, in index order
    fn keys(&self) -> StoreResult<Vec<String>> {
        let len = self.len()?;
        let mut keys = Vec::with_capacity(len);
        for index in 0..len {
            if let Some(key) = self.key(index)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
