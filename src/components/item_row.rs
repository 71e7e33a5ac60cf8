//! Item Row Component
//!
//! One checklist row of the todo form: done checkbox, description, delete.

use leptos::prelude::*;
use todo_cards_core::RowKey;

use crate::store::{store_update_draft, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemRowInput(row_key: RowKey) -> impl IntoView {
    let store = use_app_store();

    let description = move || {
        store.draft().read().row(row_key).map(|row| row.description.clone()).unwrap_or_default()
    };
    let checked = move || store.draft().read().row(row_key).is_some_and(|row| row.is_complete);

    view! {
        <div class="todo-item-row">
            <input
                type="checkbox"
                name="isComplete"
                class="isComplete"
                prop:checked=checked
                on:change=move |ev| {
                    let is_complete = event_target_checked(&ev);
                    store_update_draft(&store, |draft| draft.set_complete(row_key, is_complete));
                }
            />
            <input
                type="text"
                name="todo-item"
                placeholder="+ New Item"
                class="todo-item"
                prop:value=description
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    if store_update_draft(&store, |draft| draft.input_description(row_key, value)) {
                        log::debug!("[FORM] Row {} spawned a new item row", row_key);
                    }
                }
            />
            <span
                class="material-symbols-outlined icon delete-todo-item"
                on:click=move |_| {
                    store_update_draft(&store, |draft| draft.remove_row(row_key));
                }
            >
                "delete"
            </span>
        </div>
    }
}
