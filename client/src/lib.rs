//! # client
//!
//! Leptos + WASM front end for the "Cut Here" message cutting game.
//!
//! The crate contains the root `App` container, the Play and Scores pages,
//! their components, the quote fetcher and the broadcast socket client. Game
//! rules live in the `cutting` crate; this crate wires them to the DOM.
//!
//! Browser-only code is gated behind the `csr` feature so the crate also
//! builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
