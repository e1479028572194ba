//! `web-sys` implementations of the core platform traits.
//!
//! Nothing here panics when the browser refuses an operation: the failure
//! is logged and the action is dropped.

use leptos::prelude::set_timeout_with_handle;
use std::time::Duration;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};
use xmode_core::{Launcher, Viewport};

fn window() -> Option<Window> {
    let window = web_sys::window();
    if window.is_none() {
        log::warn!("no window object available");
    }
    window
}

/// The document viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to_origin(&self) {
        let Some(window) = window() else { return };
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_left(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Leaves the page through `location` and `window.open`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLauncher;

impl Launcher for BrowserLauncher {
    fn navigate(&self, uri: &str) {
        let Some(window) = window() else { return };
        if let Err(err) = window.location().set_href(uri) {
            log::warn!("failed to navigate to {}: {:?}", uri, err);
        }
    }

    fn open_in_new_context(&self, url: &str) {
        let Some(window) = window() else { return };
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => {}
            Ok(None) => log::warn!("new context for {} was blocked", url),
            Err(err) => log::warn!("failed to open {}: {:?}", url, err),
        }
    }

    fn open_in_new_context_after(&self, url: &str, delay: Duration) {
        let url = url.to_string();
        let launcher = *self;
        if let Err(err) = set_timeout_with_handle(move || launcher.open_in_new_context(&url), delay) {
            log::warn!("failed to schedule fallback open: {:?}", err);
        }
    }
}

/// The agent string used for platform detection; empty when unavailable
pub fn user_agent() -> String {
    window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

/// High-resolution timestamp for animation frames
pub fn now_ms() -> Option<f64> {
    window().and_then(|w| w.performance()).map(|p| p.now())
}

pub fn alert(message: &str) {
    let Some(window) = window() else { return };
    if let Err(err) = window.alert_with_message(message) {
        log::warn!("alert failed: {:?}", err);
    }
}
