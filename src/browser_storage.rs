//! Browser localStorage Adapter
//!
//! [`KeyValueStorage`] over `window.localStorage`.

use todo_cards_core::{KeyValueStorage, StoreError, StoreResult, TodoStore};
use wasm_bindgen::JsValue;

#[derive(Clone)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> StoreResult<Self> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_message(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn len(&self) -> StoreResult<usize> {
        self.storage.length().map(|n| n as usize).map_err(backend_error)
    }

    fn key(&self, index: usize) -> StoreResult<Option<String>> {
        let Ok(index) = u32::try_from(index) else {
            return Ok(None);
        };
        self.storage.key(index).map_err(backend_error)
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage.get_item(key).map_err(backend_error)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage.set_item(key, value).map_err(backend_error)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.storage.remove_item(key).map_err(backend_error)
    }
}

/// Todo store over `localStorage`, or `None` (logged) when unavailable
pub fn open_todo_store() -> Option<TodoStore<BrowserStorage>> {
    match BrowserStorage::open() {
        Ok(storage) => Some(TodoStore::new(storage)),
        Err(e) => {
            log::error!("[STORE] {}", e);
            None
        }
    }
}

fn backend_error(err: JsValue) -> StoreError {
    StoreError::Backend(js_message(&err))
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
