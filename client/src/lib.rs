//! # hodl-client
//!
//! Leptos + WASM root composition layer for the hodlCoin staking web client.
//!
//! This crate owns the page shell (header, content slot, footer), theme
//! resolution with light/dark/system modes, and document-level metadata.
//! The `ssr` feature renders it from `hodl-server`; the `hydrate` feature
//! builds the browser bundle with the storage and media-query adapters.

pub mod app;
pub mod components;
pub mod metadata;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
