//! Todo Service
//!
//! The "save" flow of the todo form, independent of any UI.

use crate::domain::Todo;
use crate::draft::TodoDraft;
use crate::repository::{IdAllocator, KeyValueStorage, TodoStore};

/// Turn `draft` into a todo: allocate an id, `render` it, persist it,
/// then reset the draft.
///
/// Returns `None` and leaves the draft untouched when no id can be
/// allocated. Persistence failures are logged by the store; the rendered
/// card stays.
pub fn save_draft<S: KeyValueStorage>(
    todos: &TodoStore<S>,
    ids: &mut IdAllocator,
    draft: &mut TodoDraft,
    created_at: impl Into<String>,
    render: impl FnOnce(&Todo),
) -> Option<Todo> {
    let id = ids.allocate(todos)?;
    let todo = draft.to_todo(id, created_at);
    log::debug!("[FORM] Saving todo {} with {} items", todo.id, todo.items.len());

    render(&todo);
    let _ = todos.put(&todo);

    draft.reset();
    Some(todo)
}
