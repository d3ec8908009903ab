use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod domain;
pub mod edit_dialog;
pub mod infrastructure;
pub mod state;

/// Wire up logging and panic reporting as soon as the module loads.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 logging initialized");
}

/// Mount the application into the document body.
#[wasm_bindgen]
pub fn run_app() {
    get_logger().info(LogComponent::Presentation("Initialize"), "mounting trendline chart app");
    leptos::mount_to_body(app::App);
}
