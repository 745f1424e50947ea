// CyberFortify landing page — browser entry point
// Build with `trunk serve` / `trunk build --release` from this directory.

use cyberfortify_site::App;
use cyberfortify_site::styles::PAGE_CSS;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting landing page");
    leptos::mount::mount_to_body(|| {
        view! {
            <style>{PAGE_CSS}</style>
            <App />
        }
    });
}
