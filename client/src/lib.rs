//! # client
//!
//! Leptos + WASM frontend for the DealDeck price-comparison page.
//!
//! This crate contains the page, its components, application state, the
//! shared `/compare` wire types, and the browser helpers for theme
//! persistence. The server crate renders it with `ssr`; the browser bundle
//! is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
