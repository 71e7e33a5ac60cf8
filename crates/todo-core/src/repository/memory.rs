//! In-Memory Storage
//!
//! Map-backed [`KeyValueStorage`] for host-side use and tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::traits::KeyValueStorage;
use crate::domain::StoreResult;

/// Clones share the same underlying map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn len(&self) -> StoreResult<usize> {
        Ok(self.entries.borrow().len())
    }

    fn key(&self, index: usize) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().keys().nth(index).cloned())
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.entries.borrow().keys().cloned().collect())
    }
}
