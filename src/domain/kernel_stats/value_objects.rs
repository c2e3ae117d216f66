use derive_more::Display;
use serde::Deserialize;
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - which statistic a series carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
pub enum Metric {
    #[display(fmt = "Mean Accuracy")]
    #[strum(serialize = "accuracy")]
    Accuracy,
    #[display(fmt = "Mean Loss")]
    #[strum(serialize = "loss")]
    Loss,
}

/// Value Object - what to do with the empty segment after a terminating newline.
///
/// `Keep` mirrors a plain split on `'\n'`, so `"h\nA,1\n"` yields a second
/// record `("", NaN)`. `Skip` drops that final segment only; interior blank
/// lines are always kept.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TrailingLinePolicy {
    #[default]
    #[display(fmt = "keep")]
    #[strum(serialize = "keep")]
    Keep,
    #[display(fmt = "skip")]
    #[strum(serialize = "skip")]
    Skip,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn metric_names() {
        let names: Vec<String> = Metric::iter().map(|m| m.to_string()).collect();
        assert_eq!(names, vec!["Mean Accuracy", "Mean Loss"]);
        assert_eq!(Metric::Loss.as_ref(), "loss");
    }

    #[test]
    fn trailing_policy_parses_from_text() {
        assert_eq!(TrailingLinePolicy::from_str("skip").ok(), Some(TrailingLinePolicy::Skip));
        assert_eq!(TrailingLinePolicy::default(), TrailingLinePolicy::Keep);
        assert!(TrailingLinePolicy::from_str("drop").is_err());
    }
}
