//! # client
//!
//! Leptos + WASM frontend for the math drawing board.
//!
//! This crate contains the home page, its components, session and UI state,
//! the recognition HTTP client, and browser utilities (timers, typesetting).
//! It integrates with the `canvas` crate for pixel drawing via the
//! `CanvasHost` bridge component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then hydrate the
/// server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
