//! Todo Entity
//!
//! One todo card: a title, checklist items and a creation timestamp.

use serde::{Deserialize, Serialize};

/// Todo identifier. `0` means "not assigned".
pub type TodoId = u32;

/// One checklist line of a todo card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TodoItem {
    /// Item text (`todoItem` in records written by the JavaScript app)
    #[serde(alias = "todoItem")]
    pub description: String,
    /// Rendered struck-through when set
    pub is_complete: bool,
}

impl TodoItem {
    pub fn new(description: impl Into<String>, is_complete: bool) -> Self {
        Self {
            description: description.into(),
            is_complete,
        }
    }

    /// Blank items are never persisted
    pub fn is_blank(&self) -> bool {
        self.description.is_empty()
    }
}

/// A todo card as stored under its id
///
/// Missing fields fall back to defaults and unknown fields are ignored,
/// so older records stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, also the storage key
    pub id: TodoId,
    /// Card heading
    pub title: String,
    /// Checklist items in entry order
    #[serde(alias = "todoItems")]
    pub items: Vec<TodoItem>,
    /// Formatted creation time, see [`crate::timestamp`]
    #[serde(alias = "dateCreated")]
    pub created_at: String,
}

impl Todo {
    /// Build a todo, dropping blank items
    pub fn new(id: TodoId, title: impl Into<String>, items: Vec<TodoItem>, created_at: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            items: items.into_iter().filter(|item| !item.is_blank()).collect(),
            created_at: created_at.into(),
        }
    }

    pub fn has_id(&self) -> bool {
        self.id != 0
    }

    /// Key this todo is stored under
    pub fn storage_key(&self) -> String {
        self.id.to_string()
    }

    /// Copy of this todo without blank items, as written to storage
    pub fn without_blank_items(&self) -> Self {
        Self {
            items: self.items.iter().filter(|item| !item.is_blank()).cloned().collect(),
            ..self.clone()
        }
    }
}
