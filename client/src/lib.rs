//! # client
//!
//! Leptos frontend for the GrowthLens dashboard: the analysis guide, the
//! sample transcript library and the lead editor.
//!
//! Domain rules (validation, submit flow, copy confirmation) live in the
//! `records` crate; this crate binds them to reactive signals, browser APIs
//! and the server's JSON endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
