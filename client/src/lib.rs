//! # favorites-client
//!
//! Leptos + WASM frontend for the sneaker showcase and its favorites list.
//!
//! `store` persists favorited products in the browser (IndexedDB), `sync`
//! keeps rendered favorite controls in step with it, and `pages` /
//! `components` render the showcase and the favorites listing.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod store;
pub mod sync;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
