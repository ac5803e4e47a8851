//! Recipe Browser Web App (Leptos + WASM)

mod app;
mod components;
mod api;
pub mod dom;

use wasm_bindgen::prelude::*;

/// `log` の出力先をブラウザコンソールにする
///
/// 2回目以降の呼び出しは警告を出して false を返す。
pub fn init_logger(level: log::Level) -> bool {
    match console_log::init_with_level(level) {
        Ok(()) => true,
        Err(e) => {
            gloo::console::warn!(format!("logger already initialized: {}", e));
            false
        }
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    init_logger(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    });
    log::debug!("recipe browser started");
    leptos::mount::mount_to_body(app::App);
}
