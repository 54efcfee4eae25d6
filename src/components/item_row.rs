//! Item Row Component
//!
//! Label, optional due date and the per-item buttons.

use leptos::prelude::*;

use crate::config::use_config;
use crate::dialog::prompt_text;
use crate::models::Item;
use crate::store::{store_edit_item, store_remove_item, store_toggle_item, use_app_store};

/// A single item row in the list
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();
    let config = use_config();

    let id = item.id;
    let completed = item.completed;
    let due_label = item.due_label(config.due_date_format);
    let edit_prompt = config.edit_prompt;

    let row_class = if completed {
        "list-group-item list-group-item-dark completed"
    } else {
        "list-group-item list-group-item-dark"
    };
    let row_style = format!(
        "display: flex; justify-content: space-between; text-decoration: {};",
        if completed { "line-through" } else { "none" }
    );

    view! {
        <div
            class=row_class
            style=row_style
        >
            <span class="item-text">{item.value}</span>

            {due_label.map(|label| view! {
                <span class="item-due">"Due: " {label}</span>
            })}

            <span class="item-actions">
                <button class="btn btn-light delete-btn" on:click=move |_| store_remove_item(&store, id)>
                    "Delete"
                </button>
                <button class="btn btn-light" on:click=move |_| {
                    let answer = prompt_text(edit_prompt);
                    store_edit_item(&store, id, answer);
                }>
                    "Edit"
                </button>
                <button class="btn btn-light" on:click=move |_| store_toggle_item(&store, id)>
                    {if completed { "Undo" } else { "Complete" }}
                </button>
            </span>
        </div>
    }
}
