use super::value_objects::{ChartKind, Font, Padding, Rgba};
use serde::Serialize;

/// Domain entity - one complete Chart.js configuration.
///
/// Serializes to `{ type, data: { labels, datasets }, options }`, the object
/// passed to `new Chart(canvas, config)`. `NaN` values serialize as `null`,
/// which Chart.js draws as a missing bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub fill: bool,
    pub background_color: Rgba,
    pub border_color: Rgba,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
    pub ticks: Ticks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks_limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub title: TitleOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
    pub font: Font,
    pub padding: Padding,
}

impl ChartSpec {
    pub fn category_count(&self) -> usize {
        self.data.labels.len()
    }

    /// The single dataset every spec carries
    pub fn dataset(&self) -> Option<&Dataset> {
        self.data.datasets.first()
    }

    /// Structural equality that treats `NaN` in the same slot as equal
    pub fn same_shape(&self, other: &ChartSpec) -> bool {
        let values_match = self.data.datasets.len() == other.data.datasets.len()
            && self.data.datasets.iter().zip(&other.data.datasets).all(|(a, b)| {
                a.data.len() == b.data.len()
                    && a.data.iter().zip(&b.data).all(|(x, y)| x == y || (x.is_nan() && y.is_nan()))
            });
        let strip = |spec: &ChartSpec| {
            let mut copy = spec.clone();
            copy.data.datasets.iter_mut().for_each(|d| d.data.clear());
            copy
        };
        values_match && strip(self) == strip(other)
    }
}
