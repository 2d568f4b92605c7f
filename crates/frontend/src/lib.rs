pub mod app;
pub mod bootstrap;
pub mod domain;
pub mod shared;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    bootstrap::install_submit_logger();

    // JSON-блоки должны быть прочитаны до первого рендера
    let data = bootstrap::load_page_data();

    match bootstrap::mount_element() {
        Some(root) => {
            leptos::mount::mount_to(root, move || view! { <App data=data /> }).forget();
        }
        None => {
            log::warn!(
                "#{} not found, mounting quotation form to <body>",
                bootstrap::MOUNT_ELEMENT_ID
            );
            leptos::mount::mount_to_body(move || view! { <App data=data /> });
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
