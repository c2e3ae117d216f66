pub mod chart_js;

pub use chart_js::ChartJsSurface;
