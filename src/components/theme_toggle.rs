//! Theme Toggle Component
//!
//! Switches the body between light and dark mode.

use leptos::prelude::*;
use todo_cards_core::Theme;

use crate::store::{store_toggle_theme, use_app_store, AppStateStoreFields};

fn apply_body_theme(theme: Theme) {
    let Some(body) = document().body() else {
        return;
    };
    let classes = body.class_list();
    let _ = classes.remove_1(theme.toggled().body_class());
    let _ = classes.add_1(theme.body_class());
}

/// Button labelled with the icon of the theme it switches to
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    // Keep <body> in sync with the current theme
    Effect::new(move |_| apply_body_theme(store.theme().get()));

    let toggle = move |_| {
        let theme = store_toggle_theme(&store);
        log::debug!("[APP] Theme switched to {:?}", theme);
    };

    view! {
        <button
            id="mode-toggle"
            class="material-symbols-outlined icon"
            title="Toggle theme"
            on:click=toggle
        >
            {move || store.theme().get().toggle_icon()}
        </button>
    }
}
