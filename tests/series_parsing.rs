use kernel_stats_charts::domain::kernel_stats::{SeriesParser, TrailingLinePolicy};
use quickcheck_macros::quickcheck;

fn csv(rows: &[(u16, u32)]) -> String {
    let mut text = String::from("kernel_size,mean");
    for (kernel, raw) in rows {
        text.push('\n');
        text.push_str(&format!("{},{}", kernel, *raw as f64 / 1000.0));
    }
    text
}

#[quickcheck]
fn well_formed_rows_keep_count_and_order(rows: Vec<(u16, u32)>) -> bool {
    let series = SeriesParser::default().parse(&csv(&rows));

    series.len() == rows.len()
        && series.labels().iter().zip(&rows).all(|(l, (k, _))| *l == k.to_string())
        && series.values().iter().zip(&rows).all(|(v, (_, raw))| *v == *raw as f64 / 1000.0)
}

#[quickcheck]
fn header_never_becomes_a_record(header: String) -> bool {
    let header = header.replace('\n', "");
    let series = SeriesParser::default().parse(&format!("{header}\n3,0.5"));
    series.labels() == ["3"] && series.values() == [0.5]
}

#[test]
fn trailing_newline_is_kept_by_default() {
    let series = SeriesParser::default().parse("h1,h2\nA,0.99\nB,0.995\n");

    assert_eq!(series.labels(), &["A", "B", ""]);
    assert_eq!(&series.values()[..2], &[0.99, 0.995]);
    assert!(series.values()[2].is_nan());
}

#[test]
fn trailing_newline_can_be_skipped() {
    let series = SeriesParser::new(TrailingLinePolicy::Skip).parse("h1,h2\nA,0.99\nB,0.995\n");

    assert_eq!(series.labels(), &["A", "B"]);
    assert_eq!(series.values(), &[0.99, 0.995]);
}

#[test]
fn bad_number_does_not_stop_later_rows() {
    let series = SeriesParser::default().parse("kernel,mean\nC,abc\nD,0.5");

    assert_eq!(series.labels(), &["C", "D"]);
    assert!(series.values()[0].is_nan());
    assert_eq!(series.values()[1], 0.5);
}

#[test]
fn crlf_files_parse_values_and_keep_raw_labels() {
    let series = SeriesParser::new(TrailingLinePolicy::Skip).parse("kernel,mean\r\n3,0.991\r\n5,0.987\r\n");

    assert_eq!(series.labels(), &["3", "5"]);
    assert_eq!(series.values(), &[0.991, 0.987]);
}

#[test]
fn labels_are_not_trimmed() {
    let series = SeriesParser::default().parse("h\n 7 ,0.1");
    assert_eq!(series.labels(), &[" 7 "]);
}
