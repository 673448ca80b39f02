// =============================================================================
// IgniteX Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use ignitex_web::{App, Environment};

fn main() {
    console_error_panic_hook::set_once();

    // Ignore if already initialized by the library mount
    let _ = console_log::init_with_level(Environment::current().log_level());

    log::info!("Starting IgniteX web ({:?})", Environment::current());

    leptos::mount::mount_to_body(App);
}
