pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use shared::config::{load_config, Config};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = load_config();

    // initializes logging using the `log` crate
    let level = loaded.as_ref().map(Config::log_level).unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = loaded.unwrap_or_else(|e| {
        log::error!("invalid embedded config, using defaults: {:#}", e);
        Config::default()
    });
    log::info!("employees API at {}", config.api.base_url);

    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
