//! Todo Cards Frontend App
//!
//! Header with theme toggle and "new todo" button, the todo form behind an
//! overlay, and the card display.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser_storage::open_todo_store;
use crate::components::{CardList, ThemeToggle, TodoForm};
use crate::config::APP_TITLE;
use crate::store::{store_load, store_open_form, AppState, AppStateStoreFields, TodoHandle};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    // One storage handle shared by load and save
    let todos: TodoHandle = StoredValue::new_local(open_todo_store());
    provide_context(todos);

    // Load persisted todos on mount
    Effect::new(move |_| {
        todos.with_value(|todos| match todos {
            Some(todos) => store_load(&store, todos),
            None => log::warn!("[APP] Starting without persisted todos"),
        })
    });

    let overlay_class = move || if store.form_open().get() { "overlay" } else { "" };

    view! {
        <header class="app-header">
            <h1>{APP_TITLE}</h1>
            <div class="header-actions">
                <ThemeToggle />
                <button id="new-todo-btn" on:click=move |_| store_open_form(&store)>
                    "+ New Todo"
                </button>
            </div>
        </header>

        <div id="overlay-effect" class=overlay_class></div>
        <TodoForm />

        <main>
            <CardList />
        </main>
    }
}
