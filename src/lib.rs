//! # quill
//!
//! Leptos + WASM frontend for the Quill blog.
//!
//! The routing core (`routing`, `state`) is plain Rust: path patterns, the
//! route table, the access guard and the auth state machine, all testable on
//! the host. `components` and `pages` bind that core to the browser, and
//! `net` talks to the blog's REST API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
