use serde::Deserialize;

use crate::domain::{
    chart::ChartKind,
    errors::{AppResult, ConfigurationError},
    kernel_stats::{Metric, TrailingLinePolicy},
};

/// Where one chart's data comes from and where it is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSource {
    pub csv_url: String,
    pub canvas_id: String,
}

impl ChartSource {
    pub fn new(csv_url: impl Into<String>, canvas_id: impl Into<String>) -> Self {
        Self { csv_url: csv_url.into(), canvas_id: canvas_id.into() }
    }

    fn overridden_by(self, patch: ChartSourcePatch) -> Self {
        Self {
            csv_url: patch.csv_url.unwrap_or(self.csv_url),
            canvas_id: patch.canvas_id.unwrap_or(self.canvas_id),
        }
    }
}

/// Page-level settings. Every field has a default, so `{}` is a valid config
/// and `{"accuracy":{"csvUrl":"a.csv"}}` keeps the accuracy canvas id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "DashboardConfigPatch")]
pub struct DashboardConfig {
    pub accuracy: ChartSource,
    pub loss: ChartSource,
    pub chart_kind: ChartKind,
    pub trailing_line: TrailingLinePolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            accuracy: ChartSource::new("./data/acc_by_kernel.csv", "accChart"),
            loss: ChartSource::new("./data/loss_by_kernel.csv", "lossChart"),
            chart_kind: ChartKind::Bar,
            trailing_line: TrailingLinePolicy::Keep,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ChartSourcePatch {
    csv_url: Option<String>,
    canvas_id: Option<String>,
}

/// Wire form of [`DashboardConfig`]: absent fields keep their defaults
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DashboardConfigPatch {
    accuracy: ChartSourcePatch,
    loss: ChartSourcePatch,
    chart_kind: Option<ChartKind>,
    trailing_line: Option<TrailingLinePolicy>,
}

impl From<DashboardConfigPatch> for DashboardConfig {
    fn from(patch: DashboardConfigPatch) -> Self {
        let defaults = DashboardConfig::default();
        Self {
            accuracy: defaults.accuracy.overridden_by(patch.accuracy),
            loss: defaults.loss.overridden_by(patch.loss),
            chart_kind: patch.chart_kind.unwrap_or(defaults.chart_kind),
            trailing_line: patch.trailing_line.unwrap_or(defaults.trailing_line),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigurationError::InvalidConfig(e.to_string()).into())
    }

    pub fn source(&self, metric: Metric) -> &ChartSource {
        match metric {
            Metric::Accuracy => &self.accuracy,
            Metric::Loss => &self.loss,
        }
    }
}
