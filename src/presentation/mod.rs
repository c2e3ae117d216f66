pub mod wasm_api;

pub use wasm_api::{config_from_js, run, run_with_config};
