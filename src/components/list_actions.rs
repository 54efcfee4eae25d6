//! List Actions Component
//!
//! Clear All (only while there is something to clear) and the theme toggle.

use leptos::prelude::*;

use crate::store::{store_clear_items, store_toggle_theme, use_app_store, AppStateStoreFields};

#[component]
pub fn ListActions() -> impl IntoView {
    let store = use_app_store();

    let has_items = move || store.items().with(|items| !items.is_empty());

    view! {
        <div class="list-actions">
            <Show when=has_items>
                <button class="btn btn-danger mt-3" on:click=move |_| store_clear_items(&store)>
                    "Clear All"
                </button>
            </Show>
            <button class="btn btn-secondary mt-3" on:click=move |_| store_toggle_theme(&store)>
                {move || store.theme().get().toggle_label()}
            </button>
        </div>
    }
}
