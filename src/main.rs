mod app;
mod components;
mod config;
mod error;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use storefront_core::StorefrontConfig;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| StorefrontConfig::default().log_level);
    utils::logging::init(&log_level);

    let config = loaded.unwrap_or_else(|err| {
        tracing::error!(error = %err, "invalid embedded configuration, using defaults");
        StorefrontConfig::default()
    });
    tracing::info!(api = %config.api_base_url, page_size = config.page_size, "starting {}", config::APP_NAME);

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App config=config /> }).forget();
}
