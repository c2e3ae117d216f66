use derive_more::Display;
use serde::{Deserialize, Serialize, Serializer};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - Chart.js chart type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    #[display(fmt = "bar")]
    #[strum(serialize = "bar")]
    Bar,
    #[display(fmt = "line")]
    #[strum(serialize = "line")]
    Line,
}

/// Value Object - CSS `rgba(...)` color, serialized as its CSS text
#[derive(Debug, Clone, Copy, PartialEq, Display)]
#[display(fmt = "rgba({}, {}, {}, {})", r, g, b, a)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Font {
    pub size: u32,
}

impl Font {
    pub const fn sized(size: u32) -> Self {
        Self { size }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
}

/// Value Object - fixed numeric axis range, independent of the data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
