#![allow(warnings)]
//! Travel List Frontend Entry Point

mod app;
mod components;
mod context;
mod platform;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    let config = platform::load_config();
    tracing::info!(title = %config.title, "starting travel list");
    mount_to_body(move || view! { <App config=config /> });
}
