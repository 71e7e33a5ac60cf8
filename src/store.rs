//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use reactive_stores::Store;
use todo_cards_core::config::DEFAULT_THEME;
use todo_cards_core::{service, timestamp, IdAllocator, KeyValueStorage, Theme, Todo, TodoDraft, TodoStore};

use crate::browser_storage::BrowserStorage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rendered cards, in the order they were appended
    pub cards: Vec<Todo>,
    /// Contents of the "new todo" form
    pub draft: TodoDraft,
    /// Source of ids for new todos
    pub ids: IdAllocator,
    /// Whether the overlay and form panel are shown
    pub form_open: bool,
    pub theme: Theme,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            theme: DEFAULT_THEME,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Persistent todo store, opened once at startup (`None` when
/// `localStorage` is unavailable)
pub type TodoHandle = StoredValue<Option<TodoStore<BrowserStorage>>, LocalStorage>;

/// Get the persistent todo store from context
pub fn use_todo_store() -> TodoHandle {
    expect_context::<TodoHandle>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a card to the display
pub fn store_append_card(store: &AppStore, todo: Todo) {
    store.cards().write().push(todo);
}

/// Replace the displayed cards and id allocator from persisted state
pub fn store_load<S: KeyValueStorage>(store: &AppStore, todos: &TodoStore<S>) {
    let cards = todos.list();
    log::info!("[APP] Loaded {} todos", cards.len());
    *store.ids().write() = IdAllocator::resume(todos);
    *store.cards().write() = cards;
}

/// Save the form draft as a new card; `false` when nothing was saved
pub fn store_save_draft<S: KeyValueStorage>(store: &AppStore, todos: &TodoStore<S>) -> bool {
    let mut ids = store.ids().get_untracked();
    let mut draft = store.draft().get_untracked();

    let saved = service::save_draft(todos, &mut ids, &mut draft, timestamp::now(), |todo| {
        store_append_card(store, todo.clone());
    });
    if saved.is_none() {
        return false;
    }

    *store.ids().write() = ids;
    *store.draft().write() = draft;
    true
}

/// Mutate the form draft in place
pub fn store_update_draft<R>(store: &AppStore, f: impl FnOnce(&mut TodoDraft) -> R) -> R {
    f(&mut store.draft().write())
}

/// Show the form, starting from a clean draft
pub fn store_open_form(store: &AppStore) {
    store.draft().write().reset();
    *store.form_open().write() = true;
}

/// Hide the form
pub fn store_close_form(store: &AppStore) {
    *store.form_open().write() = false;
}

/// Flip between light and dark, returning the new theme
pub fn store_toggle_theme(store: &AppStore) -> Theme {
    let binding = store.theme();
    let mut theme = binding.write();
    *theme = theme.toggled();
    *theme
}
