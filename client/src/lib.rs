//! # client
//!
//! Leptos + WASM frontend for the job placement site: dashboard, job-site
//! directory, application wizard, and contact form.
//!
//! Pages and components live here together with the view state machines and
//! the REST helpers that talk to the placement API through the host's `/api`
//! forwarder.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
