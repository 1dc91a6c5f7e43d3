//! WASM entry point: logging, panic hook, and widget bootstrap.

use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry, invoked by the host page's loader. The blog includes the
/// module script at the end of `<body>`, so the DOM is fully constructed by
/// the time this runs.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document available; side notes disabled");
        return;
    };

    let count = crate::host::enhance_document(&document);
    log::info!("side notes initialized: {count}");
}
