#[allow(clippy::unit_arg, clippy::unused_unit)]
mod app;
mod browser;
mod chrome;
mod icons;
mod pages;
mod reveal;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
///
/// This function is called automatically when the WASM module is loaded in the browser.
/// It installs the panic hook and console logger, then mounts the Leptos application
/// to the document body.
#[wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }

    leptos::mount::mount_to_body(app::App);
}
