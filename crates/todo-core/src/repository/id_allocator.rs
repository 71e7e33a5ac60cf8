//! Id Allocator
//!
//! Hands out todo ids from a persisted high-water mark, so ids are never
//! reused after a deletion shrinks the record count.

use super::todo_store::TodoStore;
use super::traits::KeyValueStorage;
use crate::domain::TodoId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdAllocator {
    last: TodoId,
}

impl IdAllocator {
    /// Continue after the highest id ever handed out or stored
    pub fn resume<S: KeyValueStorage>(store: &TodoStore<S>) -> Self {
        let persisted = store.read_sequence().unwrap_or(0);
        let last = persisted.max(store.max_record_id());
        log::debug!("[STORE] Id allocator resumed at {}", last);
        Self { last }
    }

    /// Last id handed out (0 before the first allocation)
    pub fn last(&self) -> TodoId {
        self.last
    }

    /// Next id, with the new high-water mark written back to `store`
    ///
    /// `None` (logged) once the id space is exhausted. A failed sequence
    /// write is logged by the store; the id is still unique for this session.
    pub fn allocate<S: KeyValueStorage>(&mut self, store: &TodoStore<S>) -> Option<TodoId> {
        let Some(next) = self.last.checked_add(1) else {
            log::error!("[STORE] Id space exhausted after {}", self.last);
            return None;
        };
        self.last = next;
        let _ = store.write_sequence(next);
        Some(next)
    }
}
