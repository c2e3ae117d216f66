use std::cell::RefCell;
use std::collections::HashMap;

use gloo::utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;

use crate::domain::{
    chart::{ChartSpec, ChartSurface},
    errors::{AppResult, RenderingError},
    logging::LogComponent,
};
use crate::{log_debug, log_info, log_warn};

#[wasm_bindgen]
extern "C" {
    /// Global `Chart` constructor provided by the Chart.js script tag
    #[wasm_bindgen(js_name = Chart)]
    type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(item: &JsValue, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &JsChart);
}

thread_local! {
    // Chart.js refuses a canvas that already hosts a chart, so keep the
    // live handle per surface and destroy it before mounting a new one.
    static MOUNTED: RefCell<HashMap<String, JsChart>> = RefCell::new(HashMap::new());
}

/// Renders specs with Chart.js onto page elements looked up by id
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJsSurface;

impl ChartJsSurface {
    pub fn new() -> Self {
        Self
    }

    /// The element with `id`, or `null` when it is absent. Chart.js decides
    /// what a missing canvas means.
    fn lookup(id: &str) -> AppResult<JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| RenderingError::BrowserApi("document not available".to_string()))?;

        match document.get_element_by_id(id) {
            Some(element) => Ok(element.into()),
            None => {
                log_warn!(LogComponent::Infrastructure("ChartJs"), "element '{}' not found", id);
                Ok(JsValue::NULL)
            }
        }
    }
}

impl ChartSurface for ChartJsSurface {
    fn render(&self, surface_id: &str, spec: &ChartSpec) -> AppResult<()> {
        let config = JsValue::from_serde(spec)
            .map_err(|e| RenderingError::SerializationFailed(e.to_string()))?;
        let surface = Self::lookup(surface_id)?;

        if let Some(previous) = MOUNTED.with(|m| m.borrow_mut().remove(surface_id)) {
            log_debug!(LogComponent::Infrastructure("ChartJs"), "destroying previous chart on '{}'", surface_id);
            previous.destroy();
        }

        let chart = JsChart::new(&surface, &config).map_err(|e| RenderingError::ChartRejected {
            surface_id: surface_id.to_string(),
            reason: e.as_string().unwrap_or_else(|| format!("{e:?}")),
        })?;

        MOUNTED.with(|m| m.borrow_mut().insert(surface_id.to_string(), chart));

        log_info!(
            LogComponent::Infrastructure("ChartJs"),
            "mounted {} chart '{}' with {} categories on '{}'",
            spec.kind,
            spec.options.plugins.title.text,
            spec.category_count(),
            surface_id
        );

        Ok(())
    }
}
