//! WebAssembly entry point of the StyleGenie front end.
//!
//! Hydrates the server-rendered page and routes `log` records from the `app`
//! crate to the browser console.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Installs console logging and the panic hook, then hydrates `app::component`.
pub fn hydrate() {
    use app::component;

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}
