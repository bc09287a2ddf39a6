/// Site Zoom - Browser Extension that remembers a zoom level per website
/// Built with Rust + WASM + Yew

mod background;
mod bridge;
pub mod browser;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod storage;
pub mod tab_data;
pub mod ui;
pub mod watcher;
pub mod zoom;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod testing;

use std::sync::Once;
use wasm_bindgen::prelude::*;

static LOGGER: Once = Once::new();

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}

fn init_logging(level: log::Level) {
    LOGGER.call_once(|| wasm_logger::init(wasm_logger::Config::new(log::Level::Trace)));
    log::set_max_level(level.to_level_filter());
}

// Re-export zoom helpers for JavaScript access
#[wasm_bindgen]
pub fn zoom_label(zoom: f64) -> String {
    zoom::format_zoom(zoom)
}

#[wasm_bindgen]
pub fn hostname_of(url: &str) -> Option<String> {
    host::extract_hostname(url)
}

// Start the Yew app for the popup, with the same options as the background script
#[wasm_bindgen]
pub fn start_popup(options: JsValue) -> Result<(), JsValue> {
    let config = config::ExtensionConfig::from_js(options)?;
    init_logging(config.log_level.to_level());
    yew::Renderer::<ui::popup::App>::with_props(ui::popup::AppProps { config }).render();
    Ok(())
}

// Start watching navigations from the background script
#[wasm_bindgen]
pub fn start_background(options: JsValue) -> Result<(), JsValue> {
    let config = config::ExtensionConfig::from_js(options)?;
    init_logging(config.log_level.to_level());
    background::start(&config);
    Ok(())
}

#[wasm_bindgen]
pub fn stop_background() {
    background::stop();
}
