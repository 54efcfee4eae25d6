//! Title Bar Component
//!
//! Centered page heading.

use leptos::prelude::*;

use crate::config::use_config;

#[component]
pub fn TitleBar() -> impl IntoView {
    let config = use_config();

    view! {
        <div class="row title-row">
            {config.title}
        </div>
        <hr />
    }
}
