//! Todo Card Component

use leptos::prelude::*;
use todo_cards_core::{Todo, TodoItem};

fn item_style(item: &TodoItem) -> &'static str {
    if item.is_complete {
        "text-decoration: line-through"
    } else {
        "text-decoration: none"
    }
}

/// Read-only card: title, checklist, creation time
#[component]
pub fn TodoCard(todo: Todo) -> impl IntoView {
    let items = todo
        .items
        .into_iter()
        .map(|item| {
            let style = item_style(&item);
            view! { <li style=style>{item.description}</li> }
        })
        .collect_view();

    view! {
        <div class="display-card">
            <h3>{todo.title}</h3>
            <ul>{items}</ul>
            <span class="created-at">{todo.created_at}</span>
        </div>
    }
}
