//! # nonitos-food-web
//!
//! Leptos + WASM frontend for Nonito's Food.
//!
//! This crate contains the login/registration pages, the layout shells, the
//! session-aware auth context, and the REST gateway to the Nonito's Food API.
//! Browser-only code is gated behind the `csr` feature so the session and
//! routing logic stays testable natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WebAssembly entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
