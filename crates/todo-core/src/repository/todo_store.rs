//! Todo Store
//!
//! Serializes todos to JSON text and keeps them in a [`KeyValueStorage`],
//! one record per key, keyed by id.

use std::collections::BTreeMap;

use super::traits::KeyValueStorage;
use crate::config::SEQUENCE_KEY;
use crate::domain::{StoreError, StoreResult, Todo, TodoId};

pub struct TodoStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> TodoStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Write `todo` under its id, replacing any existing record
    ///
    /// Blank items are dropped on the way out. Failures are logged and
    /// leave storage untouched.
    pub fn put(&self, todo: &Todo) -> StoreResult<()> {
        if !todo.has_id() {
            log::error!("[STORE] Invalid todo object: missing id (title {:?})", todo.title);
            return Err(StoreError::InvalidInput("todo has no id".into()));
        }

        let key = todo.storage_key();
        let text = serde_json::to_string(&todo.without_blank_items()).map_err(|e| {
            log::error!("[STORE] Failed to encode todo {}: {}", key, e);
            StoreError::Serialization { key: key.clone(), message: e.to_string() }
        })?;

        self.storage.set(&key, &text).inspect_err(|e| {
            log::error!("[STORE] Failed to store todo {}: {}", key, e);
        })?;
        log::info!("[STORE] Stored todo {}", key);
        Ok(())
    }

    /// Every stored record, keyed by storage key
    ///
    /// Records that fail to parse are logged and skipped. Under a numeric
    /// key the key is authoritative for the record's id.
    pub fn get_all(&self) -> BTreeMap<String, Todo> {
        let mut todos = BTreeMap::new();
        for key in self.record_keys() {
            let text = match self.storage.get(&key) {
                Ok(Some(text)) => text,
                Ok(None) => continue,
                Err(e) => {
                    log::error!("[STORE] Failed to read key {}: {}", key, e);
                    continue;
                }
            };
            match serde_json::from_str::<Todo>(&text) {
                Ok(todo) => {
                    let todo = adopt_key_id(&key, todo);
                    todos.insert(key, todo);
                }
                Err(e) => log::error!("[STORE] Error parsing JSON for key {}: {}", key, e),
            }
        }
        todos
    }

    /// All records ordered by id, the order cards are displayed in
    pub fn list(&self) -> Vec<Todo> {
        let mut todos: Vec<Todo> = self.get_all().into_values().collect();
        todos.sort_by_key(|todo| todo.id);
        todos
    }

    /// Record stored under `key`
    ///
    /// Empty, missing or malformed keys are logged and yield `None`.
    /// A numeric key overrides the record's own id.
    pub fn get_by_id(&self, key: &str) -> Option<Todo> {
        if key.is_empty() {
            log::error!("[STORE] Invalid ID: empty key");
            return None;
        }

        let text = match self.storage.get(key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                log::error!("[STORE] No todo stored for ID {}", key);
                return None;
            }
            Err(e) => {
                log::error!("[STORE] Failed to read ID {}: {}", key, e);
                return None;
            }
        };

        serde_json::from_str(&text)
            .inspect_err(|e| log::error!("[STORE] Error parsing JSON for ID {}: {}", key, e))
            .ok()
            .map(|todo| adopt_key_id(key, todo))
    }

    /// Number of records currently held
    pub fn count(&self) -> usize {
        self.record_keys().len()
    }

    /// Delete the record under `key`. Missing keys are not an error.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        if key.is_empty() {
            log::error!("[STORE] Invalid ID: empty key");
            return Err(StoreError::InvalidInput("empty key".into()));
        }

        self.storage.remove(key).inspect_err(|e| {
            log::error!("[STORE] Failed to remove todo {}: {}", key, e);
        })?;
        log::info!("[STORE] Removed todo {}", key);
        Ok(())
    }

    /// Persisted id high-water mark, if any
    pub fn read_sequence(&self) -> Option<TodoId> {
        let text = match self.storage.get(SEQUENCE_KEY) {
            Ok(text) => text?,
            Err(e) => {
                log::error!("[STORE] Failed to read id sequence: {}", e);
                return None;
            }
        };
        text.trim()
            .parse()
            .inspect_err(|e| log::warn!("[STORE] Ignoring malformed id sequence {:?}: {}", text, e))
            .ok()
    }

    pub fn write_sequence(&self, last_id: TodoId) -> StoreResult<()> {
        self.storage.set(SEQUENCE_KEY, &last_id.to_string()).inspect_err(|e| {
            log::error!("[STORE] Failed to persist id sequence {}: {}", last_id, e);
        })
    }

    /// Highest id among keys that parse as ids
    pub fn max_record_id(&self) -> TodoId {
        self.record_keys()
            .iter()
            .filter_map(|key| key.parse::<TodoId>().ok())
            .max()
            .unwrap_or(0)
    }

    fn record_keys(&self) -> Vec<String> {
        match self.storage.keys() {
            Ok(keys) => keys.into_iter().filter(|key| key != SEQUENCE_KEY).collect(),
            Err(e) => {
                log::error!("[STORE] Failed to enumerate keys: {}", e);
                Vec::new()
            }
        }
    }
}

/// Records read leniently may lack an id or disagree with their key;
/// a numeric key wins.
fn adopt_key_id(key: &str, mut todo: Todo) -> Todo {
    if let Ok(key_id) = key.parse::<TodoId>() {
        if todo.id != key_id {
            log::warn!("[STORE] Record {} carries id {}, using its key", key, todo.id);
            todo.id = key_id;
        }
    }
    todo
}
