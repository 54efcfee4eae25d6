//! New Item Form Component
//!
//! Text input, due date picker and ADD button.

use leptos::prelude::*;

use crate::config::use_config;
use crate::models::{date_input_value, parse_date_input};
use crate::store::{store_add_item, use_app_store, AppStateStoreFields};

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();
    let config = use_config();

    // Enter in the text box submits too
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_add_item(&store);
    };

    view! {
        <form class="new-item-form input-group mb-3" on:submit=on_submit>
            <input
                type="text"
                class="form-control form-control-lg"
                placeholder=config.add_placeholder
                aria-label="add something"
                prop:value=move || store.user_input().get()
                on:input=move |ev| {
                    *store.user_input().write() = event_target_value(&ev);
                }
            />
            <label class="date-label ml-2" for="due-date">{config.date_placeholder}</label>
            <input
                type="date"
                id="due-date"
                class="form-control date-picker ml-2"
                title=config.date_placeholder
                prop:value=move || date_input_value(store.selected_date().get())
                on:change=move |ev| {
                    *store.selected_date().write() = parse_date_input(&event_target_value(&ev));
                }
            />
            <div class="input-group">
                <button type="submit" class="btn btn-dark mt-2">"ADD"</button>
            </div>
        </form>
    }
}
