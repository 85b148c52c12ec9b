//! Barbearia Navalha de Ouro marketing site.
//!
//! ARCHITECTURE
//! ============
//! A single Leptos page rendered on the server (`ssr`) and hydrated in the
//! browser (`hydrate`). `content` holds the static copy, `state` the small
//! per-component state machines, `util` the browser glue, `components` the
//! page sections and `pages` their assembly.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logger, then hydrate the
/// server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
