//! JavaScript entry points. Minimal logic, only a bridge to the application layer.

use gloo::utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;

use crate::application::{DashboardConfig, DashboardCoordinator};
use crate::domain::{
    errors::{AppResult, ConfigurationError},
    logging::LogComponent,
};
use crate::infrastructure::{ChartJsSurface, HttpCsvClient};
use crate::log_info;

/// Load both CSV files from their default locations and draw both charts.
///
/// Call once the page's canvases exist. Rejects on any fetch or render failure.
#[wasm_bindgen]
pub async fn run() -> Result<(), JsValue> {
    run_dashboard(DashboardConfig::default()).await
}

/// Same as [`run`] with page-specific locations, e.g.
/// `runWithConfig({ accuracy: { csvUrl, canvasId }, trailingLine: "skip" })`.
/// `undefined` and `null` mean the defaults.
#[wasm_bindgen(js_name = runWithConfig)]
pub async fn run_with_config(config: JsValue) -> Result<(), JsValue> {
    run_dashboard(config_from_js(&config)?).await
}

/// `undefined` and `null` give the defaults; anything else must deserialize.
pub fn config_from_js(config: &JsValue) -> AppResult<DashboardConfig> {
    if config.is_undefined() || config.is_null() {
        return Ok(DashboardConfig::default());
    }
    config
        .into_serde::<DashboardConfig>()
        .map_err(|e| ConfigurationError::InvalidConfig(e.to_string()).into())
}

async fn run_dashboard(config: DashboardConfig) -> Result<(), JsValue> {
    log_info!(
        LogComponent::Presentation("WASM"),
        "starting dashboard: {} -> #{}, {} -> #{}",
        config.accuracy.csv_url,
        config.accuracy.canvas_id,
        config.loss.csv_url,
        config.loss.canvas_id
    );

    let coordinator = DashboardCoordinator::new(config, HttpCsvClient::new(), ChartJsSurface::new());
    coordinator.run().await?;
    Ok(())
}
