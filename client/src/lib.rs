//! # client
//!
//! Leptos + WASM frontend for DocuChain, the document issuance and
//! verification product.
//!
//! This crate contains pages, components, the browser session state, and the
//! REST helpers that talk to the document backend. The backend does all real
//! work (hashing, ledger writes, verification, persistence); this crate only
//! routes, authenticates, submits forms, and renders results.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
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
