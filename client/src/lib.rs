//! # client
//!
//! Leptos + WASM frontend for email/password authentication against a hosted
//! GoTrue provider, with a dashboard for the signed-in user.
//!
//! This crate contains the root component, pages, the auth-state hook, form
//! state, and the browser-side provider client. The `ssr` build renders the
//! loading view; the `hydrate` build resolves the session in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
