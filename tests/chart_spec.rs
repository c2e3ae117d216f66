use kernel_stats_charts::domain::chart::{ChartKind, ChartSpecFactory, MetricStyle};
use kernel_stats_charts::domain::kernel_stats::{Metric, Record, Series};
use quickcheck_macros::quickcheck;

fn series(rows: &[(&str, f64)]) -> Series {
    rows.iter().map(|(l, v)| Record::new(*l, *v)).collect()
}

#[test]
fn category_counts_follow_each_series() {
    let factory = ChartSpecFactory::default();
    let acc = factory.build(Metric::Accuracy, &series(&[("3", 0.99), ("5", 0.995), ("7", 0.993)]));
    let loss = factory.build(Metric::Loss, &series(&[("3", 0.04)]));

    assert_eq!(acc.category_count(), 3);
    assert_eq!(loss.category_count(), 1);
    assert_eq!(acc.data.labels, vec!["3", "5", "7"]);
    assert_eq!(loss.data.labels, vec!["3"]);
    assert_eq!(loss.dataset().map(|d| d.data.clone()), Some(vec![0.04]));
    assert_eq!(acc.dataset().map(|d| d.label.as_str()), Some("Mean Accuracy"));
    assert_eq!(loss.dataset().map(|d| d.label.as_str()), Some("Mean Loss"));
}

#[quickcheck]
fn value_axis_bounds_ignore_the_data(values: Vec<f64>) -> bool {
    let labels: Vec<String> = (0..values.len()).map(|i| i.to_string()).collect();
    let data: Series = labels.iter().zip(&values).map(|(l, v)| Record::new(l.as_str(), *v)).collect();
    let factory = ChartSpecFactory::default();

    let acc = factory.build(Metric::Accuracy, &data).options.scales.y;
    let loss = factory.build(Metric::Loss, &data).options.scales.y;

    acc.min == Some(0.98) && acc.max == Some(1.0) && loss.min == Some(0.0) && loss.max == Some(0.09)
}

#[test]
fn category_axis_has_no_bounds() {
    let spec = ChartSpecFactory::default().build(Metric::Loss, &series(&[("3", 0.05)]));
    let json = serde_json::to_value(&spec.options.scales.x).unwrap_or_default();

    assert!(json.get("min").is_none());
    assert!(json.get("max").is_none());
    assert!(MetricStyle::for_metric(Metric::Loss).bounds.contains(0.05));
    assert!(!MetricStyle::for_metric(Metric::Accuracy).bounds.contains(0.5));
}

#[test]
fn accuracy_value_axis_serializes_like_chart_js_options() {
    let spec = ChartSpecFactory::default().build(Metric::Accuracy, &series(&[("3", 0.99)]));
    let y = serde_json::to_string(&spec.options.scales.y).unwrap_or_default();

    insta::assert_snapshot!(y, @r#"{"title":{"display":true,"text":"Mean Accuracy","font":{"size":20}},"ticks":{"font":{"size":12},"maxTicksLimit":20},"min":0.98,"max":1.0}"#);
}

#[test]
fn loss_title_and_dataset_serialize_like_chart_js_options() {
    let spec = ChartSpecFactory::default().build(Metric::Loss, &series(&[("3", 0.05)]));
    let title = serde_json::to_string(&spec.options.plugins.title).unwrap_or_default();
    let dataset = serde_json::to_string(&spec.data.datasets).unwrap_or_default();

    insta::assert_snapshot!(title, @r#"{"display":true,"text":"Mean Loss By Kernel Size","font":{"size":24},"padding":{"top":10,"bottom":30}}"#);
    insta::assert_snapshot!(dataset, @r#"[{"label":"Mean Loss","data":[0.05],"fill":false,"backgroundColor":"rgba(255, 99, 132, 0.5)","borderColor":"rgba(255, 99, 132, 1)","borderWidth":1}]"#);
}

#[test]
fn top_level_shape_matches_chart_constructor() {
    let spec = ChartSpecFactory::new(ChartKind::Bar).build(Metric::Accuracy, &series(&[("3", f64::NAN)]));
    let json = serde_json::to_value(&spec).unwrap_or_default();

    assert_eq!(json["type"], "bar");
    assert_eq!(json["options"]["responsive"], true);
    assert_eq!(json["options"]["scales"]["x"]["title"]["text"], "Kernel Size");
    assert_eq!(json["options"]["scales"]["x"]["ticks"]["font"]["size"], 16);
    assert!(json["options"]["scales"]["x"]["ticks"].get("maxTicksLimit").is_none());
    assert!(json["data"]["datasets"][0]["data"][0].is_null());
}

#[test]
fn line_kind_only_changes_the_type() {
    let data = series(&[("3", 0.99)]);
    let bar = ChartSpecFactory::new(ChartKind::Bar).build(Metric::Accuracy, &data);
    let mut line = ChartSpecFactory::new(ChartKind::Line).build(Metric::Accuracy, &data);

    assert_eq!(line.kind, ChartKind::Line);
    line.kind = ChartKind::Bar;
    assert_eq!(line, bar);
}
