//! Todo Cards Core
//!
//! Data model, key-value record store and form logic shared by the UI.
//! Nothing in this crate touches the browser, so it is tested on the host.

pub mod config;
pub mod domain;
pub mod draft;
pub mod repository;
pub mod service;
pub mod theme;
pub mod timestamp;

pub use domain::{StoreError, StoreResult, Todo, TodoId, TodoItem};
pub use draft::{ItemRow, RowKey, TodoDraft};
pub use repository::{IdAllocator, KeyValueStorage, MemoryStorage, TodoStore};
pub use theme::Theme;
