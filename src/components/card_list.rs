//! Card List Component
//!
//! Display container for all todo cards. Cards are only ever appended.

use leptos::prelude::*;

use crate::components::TodoCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CardList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="todo-display-container">
            // Cards are append-only, so position is a stable key
            <For
                each=move || store.cards().get().into_iter().enumerate()
                key=|(position, _)| *position
                children=|(_, todo)| view! { <TodoCard todo=todo /> }
            />
        </div>
    }
}
