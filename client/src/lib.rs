//! # client
//!
//! Leptos front-end for Sage: a chat panel with persistent history plus
//! image-analysis and text-summarization screens, all talking to the
//! server's flow endpoints.
//!
//! DESIGN
//! ======
//! Conversation, toast, and transcript decisions live in `state` and
//! `util` as pure functions that test natively. Components bind those
//! functions to signals and perform the I/O they call for, with every
//! browser API behind the `csr` feature so the crate also compiles on
//! the host for tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mounts the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
