use super::entities::{Axis, AxisTitle, ChartData, ChartOptions, ChartSpec, Dataset, Plugins, Scales, Ticks, TitleOptions};
use super::value_objects::{AxisBounds, ChartKind, Font, Padding, Rgba};
use crate::domain::kernel_stats::{Metric, Series};

const CATEGORY_AXIS_TITLE: &str = "Kernel Size";
const AXIS_TITLE_FONT: Font = Font::sized(20);
const CATEGORY_TICK_FONT: Font = Font::sized(16);
const VALUE_TICK_FONT: Font = Font::sized(12);
const CHART_TITLE_FONT: Font = Font::sized(24);
const CHART_TITLE_PADDING: Padding = Padding { top: 10, bottom: 30 };
const BORDER_WIDTH: u32 = 1;
const FILL_ALPHA: f32 = 0.5;

/// Everything that differs between the accuracy and loss charts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricStyle {
    pub hue: Rgba,
    pub bounds: AxisBounds,
    pub max_ticks: Option<u32>,
}

impl MetricStyle {
    pub fn for_metric(metric: Metric) -> Self {
        match metric {
            Metric::Accuracy => Self {
                hue: Rgba::new(0, 100, 255, 1.0),
                bounds: AxisBounds::new(0.98, 1.0),
                max_ticks: Some(20),
            },
            Metric::Loss => Self {
                hue: Rgba::new(255, 99, 132, 1.0),
                bounds: AxisBounds::new(0.0, 0.09),
                max_ticks: None,
            },
        }
    }
}

/// Domain service building [`ChartSpec`] values from series.
///
/// Specs are rebuilt from scratch on every call; nothing is cached or shared
/// between metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartSpecFactory {
    kind: ChartKind,
}

impl ChartSpecFactory {
    pub fn new(kind: ChartKind) -> Self {
        Self { kind }
    }

    pub fn build(&self, metric: Metric, series: &Series) -> ChartSpec {
        let style = MetricStyle::for_metric(metric);
        let name = metric.to_string();

        ChartSpec {
            kind: self.kind,
            data: ChartData {
                labels: series.labels().to_vec(),
                datasets: vec![Dataset {
                    label: name.clone(),
                    data: series.values().to_vec(),
                    fill: false,
                    background_color: style.hue.with_alpha(FILL_ALPHA),
                    border_color: style.hue,
                    border_width: BORDER_WIDTH,
                }],
            },
            options: ChartOptions {
                responsive: true,
                scales: Scales {
                    x: Axis {
                        title: axis_title(CATEGORY_AXIS_TITLE),
                        ticks: Ticks { font: CATEGORY_TICK_FONT, max_ticks_limit: None },
                        min: None,
                        max: None,
                    },
                    y: Axis {
                        title: axis_title(&name),
                        ticks: Ticks { font: VALUE_TICK_FONT, max_ticks_limit: style.max_ticks },
                        min: Some(style.bounds.min),
                        max: Some(style.bounds.max),
                    },
                },
                plugins: Plugins {
                    title: TitleOptions {
                        display: true,
                        text: format!("{name} By {CATEGORY_AXIS_TITLE}"),
                        font: CHART_TITLE_FONT,
                        padding: CHART_TITLE_PADDING,
                    },
                },
            },
        }
    }
}

fn axis_title(text: &str) -> AxisTitle {
    AxisTitle {
        display: true,
        text: text.to_string(),
        font: AXIS_TITLE_FONT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kernel_stats::Record;

    fn sample() -> Series {
        vec![Record::new("3", 0.991), Record::new("5", 0.995)].into_iter().collect()
    }

    #[test]
    fn titles_follow_the_metric() {
        let factory = ChartSpecFactory::default();
        let acc = factory.build(Metric::Accuracy, &sample());
        let loss = factory.build(Metric::Loss, &sample());

        assert_eq!(acc.options.plugins.title.text, "Mean Accuracy By Kernel Size");
        assert_eq!(loss.options.plugins.title.text, "Mean Loss By Kernel Size");
        assert_eq!(acc.options.scales.x.title.text, "Kernel Size");
        assert_eq!(loss.options.scales.y.title.text, "Mean Loss");
    }

    #[test]
    fn only_accuracy_limits_ticks() {
        let factory = ChartSpecFactory::default();
        assert_eq!(factory.build(Metric::Accuracy, &sample()).options.scales.y.ticks.max_ticks_limit, Some(20));
        assert_eq!(factory.build(Metric::Loss, &sample()).options.scales.y.ticks.max_ticks_limit, None);
    }

    #[test]
    fn colors_differ_per_metric() {
        let factory = ChartSpecFactory::new(ChartKind::Bar);
        let acc = factory.build(Metric::Accuracy, &sample());
        let loss = factory.build(Metric::Loss, &sample());
        let acc_set = acc.dataset().map(|d| d.background_color.to_string());
        let loss_set = loss.dataset().map(|d| d.border_color.to_string());
        assert_eq!(acc_set.as_deref(), Some("rgba(0, 100, 255, 0.5)"));
        assert_eq!(loss_set.as_deref(), Some("rgba(255, 99, 132, 1)"));
    }
}
