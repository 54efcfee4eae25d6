//! Search Box Component

use leptos::prelude::*;

use crate::config::use_config;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_app_store();
    let config = use_config();

    view! {
        <input
            type="search"
            class="form-control form-control-lg mb-3"
            placeholder=config.search_placeholder
            aria-label="search something"
            prop:value=move || store.search_term().get()
            on:input=move |ev| {
                *store.search_term().write() = event_target_value(&ev);
            }
        />
    }
}
