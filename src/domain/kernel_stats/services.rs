use super::entities::{Record, Series};
use super::value_objects::TrailingLinePolicy;
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Turns `<label>,<value>` CSV text into a [`Series`].
///
/// The first line is a header and is always dropped. Every other line gives
/// exactly one record; nothing is rejected. Values that do not parse become
/// `NaN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesParser {
    trailing_line: TrailingLinePolicy,
}

impl SeriesParser {
    pub fn new(trailing_line: TrailingLinePolicy) -> Self {
        Self { trailing_line }
    }

    pub fn parse(&self, text: &str) -> Series {
        let mut lines: Vec<&str> = text.split('\n').skip(1).collect();

        if self.trailing_line == TrailingLinePolicy::Skip && lines.last() == Some(&"") {
            lines.pop();
        }

        let series: Series = lines.into_iter().map(parse_row).collect();

        log_debug!(
            LogComponent::Domain("SeriesParser"),
            "parsed {} rows ({} without a numeric value)",
            series.len(),
            series.unparsed_count()
        );

        series
    }
}

/// Field 0 is the label as written, field 1 the value. A missing field 1
/// yields `NaN`; anything after field 1 is ignored.
pub fn parse_row(line: &str) -> Record {
    let mut fields = line.split(',');
    let label = fields.next().unwrap_or_default();
    let value = fields.next().map_or(f64::NAN, parse_float_lenient);
    Record::new(label, value)
}

/// Permissive float parsing in the manner of ECMAScript `parseFloat`.
///
/// Leading whitespace is skipped, then the longest prefix that reads as a
/// decimal literal (or `Infinity`) is converted; trailing text is ignored.
/// No usable prefix gives `NaN`.
pub fn parse_float_lenient(input: &str) -> f64 {
    let trimmed = input.trim_start_matches(is_js_whitespace);
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return if trimmed.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// ECMAScript WhiteSpace and LineTerminator; U+0085 is not one of them.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}
