//! Todo Form Component
//!
//! Panel for composing a new todo: title, dynamic item rows, save/close.

use leptos::prelude::*;
use todo_cards_core::TodoDraft;

use crate::components::ItemRowInput;
use crate::store::{
    store_close_form, store_save_draft, store_update_draft, use_app_store, use_todo_store,
    AppStateStoreFields,
};

#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_app_store();
    let todos = use_todo_store();

    // The form stays open with its input when nothing could be saved
    let on_save = move |_| {
        let saved = todos.with_value(|todos| match todos {
            Some(todos) => store_save_draft(&store, todos),
            None => {
                log::error!("[FORM] Cannot save todo: storage unavailable");
                false
            }
        });
        if saved {
            store_close_form(&store);
        }
    };

    let on_close = move |_| {
        store_close_form(&store);
        store_update_draft(&store, TodoDraft::reset);
    };

    let wrapper_class = move || {
        if store.form_open().get() {
            "todo-form-wrapper"
        } else {
            "todo-form-wrapper hidden"
        }
    };

    view! {
        <div class=wrapper_class>
            <div class="todo-form">
                <div class="todo-form-header">
                    <input
                        id="todo-title"
                        type="text"
                        placeholder="Title"
                        prop:value=move || store.draft().read().title.clone()
                        on:input=move |ev| {
                            let title = event_target_value(&ev);
                            store_update_draft(&store, |draft| draft.set_title(title));
                        }
                    />
                    <button
                        id="close-form-btn"
                        type="button"
                        class="material-symbols-outlined icon"
                        on:click=on_close
                    >
                        "close"
                    </button>
                </div>

                <div class="todo-items-container">
                    <For
                        each=move || store.draft().read().rows().to_vec()
                        key=|row| row.key
                        children=move |row| view! { <ItemRowInput row_key=row.key /> }
                    />
                </div>

                <button id="save-btn" type="button" on:click=on_save>
                    "Save"
                </button>
            </div>
        </div>
    }
}
