//! Todo Widget App
//!
//! Root component: owns the state store and lays out the single column.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemListView, ListActions, NewItemForm, SearchBox, TitleBar};
use crate::config::WidgetConfig;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let config = WidgetConfig::default();

    // Provide context to all children
    provide_context(store);
    provide_context(config.clone());

    let container_style = move || config.container_style(store.theme().get());
    let container_class = move || {
        if store.theme().get().is_dark() { "container app dark" } else { "container app" }
    };

    view! {
        <div class=container_class style=container_style>
            <TitleBar />

            <div class="row">
                <div class="col-md-5 offset-md-4">
                    <NewItemForm />
                </div>
            </div>

            <div class="row">
                <div class="col-md-5 offset-md-4">
                    <SearchBox />
                    <ItemListView />
                    <ListActions />
                </div>
            </div>
        </div>
    }
}
