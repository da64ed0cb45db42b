//! # client
//!
//! Leptos frontend for the crypto ranking board dashboard.
//!
//! This crate contains the dashboard pages, the profile settings screen and
//! the UI primitives they are built from. The `ssr` feature renders it inside
//! the `server` crate; the `hydrate` feature builds the WASM bundle that
//! takes over the server-rendered markup in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entrypoint: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating {}", app::BUNDLE_NAME);
    leptos::mount::hydrate_body(app::App);
}
