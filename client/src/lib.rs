//! # client
//!
//! Leptos + WASM frontend for AfriCore, the pan-African youth network.
//!
//! This crate contains the session store, the view router, every feature
//! view (jobs, funding, civic, education, people), the typed REST client and
//! the pure list/filter logic those views share. The `africore` host crate
//! server-renders [`app::shell`] and the browser hydrates it through
//! [`hydrate`].

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
