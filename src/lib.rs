//! # portal-client
//!
//! Leptos + WASM front-end for the admissions portal: authenticated access
//! to results and admission-letter printing, with a session store, route
//! guards, a privilege-gated API client, and a profile/bank-details screen.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
