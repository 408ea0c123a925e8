/// Video Ask - Chrome Extension for asking questions about the video in the current tab
/// Built with Rust + WASM + Yew

pub mod ask;
pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod tabs;
pub mod ui;
pub mod video_id;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the extractor for JavaScript access
#[wasm_bindgen]
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id::extract_video_id(url)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
