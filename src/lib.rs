use wasm_bindgen::prelude::*;

use crate::domain::logging::{self, LogComponent};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Module start hook: installs the panic hook and browser logging.
/// Loading and drawing only happen when the page calls `run()`.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    logging::init_logger(Box::new(infrastructure::ConsoleLogger::for_build()));
    logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider::new()));

    log_info!(LogComponent::Presentation("Initialize"), "kernel stats charts ready");
}
