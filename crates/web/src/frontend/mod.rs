//! Leptos frontend (browser, wasm32 only).

pub mod app;

use wasm_bindgen::prelude::*;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    bizinvoice_observability::init();

    leptos::mount_to_body(app::App);
}
