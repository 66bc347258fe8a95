//! # lms-client
//!
//! Leptos + WASM frontend for the learning-management application.
//!
//! The interesting part of this crate is the session lifecycle: a stored
//! bearer credential is restored on startup, verified once against the
//! identity service, and the resulting [`state::auth::SessionState`] drives
//! every route decision. Pages, cards and navigation chrome are thin views
//! over that state.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
