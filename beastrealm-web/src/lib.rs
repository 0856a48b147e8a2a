#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod alert;
pub mod api;
pub mod app;
pub mod components;
pub mod context;
pub mod dom;
pub mod hooks;
pub mod logger;
pub mod pages;
pub mod paths;
pub mod router;
pub mod scheduler;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    yew::Renderer::<app::App>::new().render();
}
