//! Todo Form Draft
//!
//! State of the "new todo" form: a title plus a growing list of item rows.
//! The UI binds DOM events to these methods and renders the result.

use crate::domain::{Todo, TodoId, TodoItem};

/// Stable identity of a row, used as the render key
pub type RowKey = u32;

/// One editable checklist row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub key: RowKey,
    pub description: String,
    pub is_complete: bool,
    /// Cleared by the row's first input event
    armed: bool,
}

impl ItemRow {
    fn blank(key: RowKey) -> Self {
        Self {
            key,
            description: String::new(),
            is_complete: false,
            armed: true,
        }
    }

    pub fn to_item(&self) -> TodoItem {
        TodoItem::new(self.description.clone(), self.is_complete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    rows: Vec<ItemRow>,
    next_key: RowKey,
}

impl Default for TodoDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoDraft {
    /// Empty title and a single blank row
    pub fn new() -> Self {
        let mut draft = Self {
            title: String::new(),
            rows: Vec::new(),
            next_key: 0,
        };
        draft.push_blank_row();
        draft
    }

    /// Back to an empty title and a single blank row
    ///
    /// Row keys keep counting up so re-rendered rows never collide with
    /// ones that were just removed.
    pub fn reset(&mut self) {
        self.title.clear();
        self.rows.clear();
        self.push_blank_row();
    }

    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    pub fn row(&self, key: RowKey) -> Option<&ItemRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Apply an input event on a row's description field
    ///
    /// Each row reacts once: if its first input leaves exactly one
    /// character, a new blank row is appended. Returns whether a row was
    /// added.
    pub fn input_description(&mut self, key: RowKey, value: impl Into<String>) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.key == key) else {
            return false;
        };
        row.description = value.into();
        if !row.armed {
            return false;
        }
        row.armed = false;
        if row.description.chars().count() == 1 {
            self.push_blank_row();
            return true;
        }
        false
    }

    pub fn set_complete(&mut self, key: RowKey, is_complete: bool) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.key == key) {
            row.is_complete = is_complete;
        }
    }

    /// Drop one row from the form. Persisted todos are unaffected.
    pub fn remove_row(&mut self, key: RowKey) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.key != key);
        self.rows.len() != before
    }

    /// Non-blank rows as todo items, in row order
    pub fn items(&self) -> Vec<TodoItem> {
        self.rows
            .iter()
            .map(ItemRow::to_item)
            .filter(|item| !item.is_blank())
            .collect()
    }

    pub fn to_todo(&self, id: TodoId, created_at: impl Into<String>) -> Todo {
        Todo::new(id, self.title.clone(), self.items(), created_at)
    }

    fn push_blank_row(&mut self) {
        self.rows.push(ItemRow::blank(self.next_key));
        self.next_key += 1;
    }
}
