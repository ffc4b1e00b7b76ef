//! # agrimitra
//!
//! Leptos + WASM frontend for the AgriMitra farmer advisory platform.
//! Five tool pages (crop doctor, weather & irrigation, smart market,
//! government schemes, profit prediction) each collect form input, post it
//! to one backend REST endpoint, and render the JSON response.
//!
//! All domain analysis happens on the backend; this crate contains pages,
//! components, per-page form state, the shared submission controller, and
//! the REST client, plus a thin SSR server binary in `main.rs`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered DOM in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
