//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The helpers below
//! are the only writers of the item list; rejected operations are logged and
//! otherwise ignored.

use chrono::NaiveDate;
use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{debug, info};

use crate::filter::filter_items;
use crate::list;
use crate::models::{Item, ItemId};
use crate::theme::Theme;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Text typed into the add box
    pub user_input: String,
    /// All items, in display order
    pub items: Vec<Item>,
    pub search_term: String,
    /// Due date picked for the next item
    pub selected_date: Option<NaiveDate>,
    pub theme: Theme,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Rows currently shown, derived from items and search term
pub fn store_visible_items(store: &AppStore) -> Vec<Item> {
    let term = store.search_term().get();
    store.items().with(|items| filter_items(items, &term))
}

// ========================
// Store Helper Functions
// ========================

/// Add the typed text as a new item, then reset the input row
pub fn store_add_item(store: &AppStore) {
    let text = store.user_input().get_untracked();
    let due_date = store.selected_date().get_untracked();

    let result = list::add_item(&mut store.items().write(), &text, due_date);
    match result {
        Ok(id) => {
            debug!(%id, ?due_date, "item added");
            store.user_input().write().clear();
            *store.selected_date().write() = None;
        }
        Err(err) => debug!(%err, "add ignored"),
    }
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, id: ItemId) {
    let result = list::delete_item(&mut store.items().write(), id);
    match result {
        Ok(_) => debug!(%id, "item deleted"),
        Err(err) => debug!(%err, "delete ignored"),
    }
}

/// Replace an item's label; `None` means the prompt was cancelled
pub fn store_edit_item(store: &AppStore, id: ItemId, new_text: Option<String>) {
    let Some(new_text) = new_text else {
        debug!(%id, "edit cancelled");
        return;
    };
    let result = list::edit_item(&mut store.items().write(), id, &new_text);
    match result {
        Ok(()) => debug!(%id, "item edited"),
        Err(err) => debug!(%err, "edit ignored"),
    }
}

/// Flip an item's completed flag
pub fn store_toggle_item(store: &AppStore, id: ItemId) {
    let result = list::toggle_complete(&mut store.items().write(), id);
    match result {
        Ok(completed) => debug!(%id, completed, "item toggled"),
        Err(err) => debug!(%err, "toggle ignored"),
    }
}

/// Remove every item
pub fn store_clear_items(store: &AppStore) {
    let removed = list::clear_all(&mut store.items().write());
    info!(removed, "list cleared");
}

/// Move a visible row; indices refer to the filtered view
pub fn store_reorder_items(store: &AppStore, source: usize, dest: Option<usize>) {
    let term = store.search_term().get_untracked();
    let result = list::reorder(&mut store.items().write(), &term, source, dest);
    match result {
        Ok(()) => debug!(source, ?dest, "item moved"),
        Err(err) => debug!(%err, "reorder ignored"),
    }
}

/// Switch between light and dark
pub fn store_toggle_theme(store: &AppStore) {
    let next = store.theme().get_untracked().toggled();
    *store.theme().write() = next;
    debug!(?next, "theme changed");
}
