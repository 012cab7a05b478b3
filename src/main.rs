#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::{config_store, talent};

// Modules
mod components;
mod routes;
mod stores;
mod utils;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting Talentboard");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Loaded once and shared read-only with every route
    use_context_provider(config_store::load_bundled_config);
    use_context_provider(talent::load_bundled_directory);

    rsx! {
        Router::<routes::Route> {}
    }
}
