//! Domain Layer
//!
//! Todo entities and the errors shared by the storage layer.

mod error;
mod todo;

pub use error::{StoreError, StoreResult};
pub use todo::{Todo, TodoId, TodoItem};
