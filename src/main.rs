//! Todo Widget Frontend Entry Point

mod models;
mod error;
mod list;
mod filter;
mod theme;
mod config;
mod dialog;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting todo widget");
    mount_to_body(App);
}
