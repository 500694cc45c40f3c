//! # widget
//!
//! Embeddable assistant widget built with Leptos and compiled to WASM. A host
//! page adds one `<script>` tag carrying a `data-widget-config` JSON payload;
//! the module mounts a floating launcher and a panel with chat, quiz, and FAQ
//! tabs backed by a remote token-metered API.
//!
//! The state machines in `state` and the controller in `shell` are plain Rust
//! and test natively. Everything that touches the DOM or the network is gated
//! behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod shell;
pub mod state;
pub mod util;

/// WASM entry point, run when the module is instantiated.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    app::mount();
}
