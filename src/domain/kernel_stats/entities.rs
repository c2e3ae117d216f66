/// One CSV data row: the kernel size text and its parsed statistic
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub label: String,
    pub value: f64,
}

impl Record {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// Domain entity - column-oriented label/value table.
///
/// Labels and values are only appended together, so both columns always have
/// the same length and keep source row order.
#[derive(Debug, Clone, Default)]
pub struct Series {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.labels.push(record.label);
        self.values.push(record.value);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.labels
            .iter()
            .zip(&self.values)
            .map(|(label, value)| Record::new(label.clone(), *value))
    }

    /// Number of values that fell back to the NaN sentinel
    pub fn unparsed_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }
}

impl FromIterator<Record> for Series {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut series = Series::new();
        for record in iter {
            series.push(record);
        }
        series
    }
}

/// NaN never equals itself, so a value-wise comparison treats two sentinels
/// in the same slot as equal.
impl PartialEq for Series {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
            && self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a == b || (a.is_nan() && b.is_nan()))
    }
}

/// Both series produced by one load
#[derive(Debug, Clone, PartialEq)]
pub struct KernelStats {
    pub accuracy: Series,
    pub loss: Series,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_stay_aligned() {
        let series: Series = vec![Record::new("3", 0.99), Record::new("5", f64::NAN)]
            .into_iter()
            .collect();
        assert_eq!(series.len(), 2);
        assert_eq!(series.labels(), &["3".to_string(), "5".to_string()]);
        assert_eq!(series.values().len(), 2);
        assert_eq!(series.unparsed_count(), 1);
        assert_eq!(series.records().next(), Some(Record::new("3", 0.99)));
    }

    #[test]
    fn nan_slots_compare_equal() {
        let a: Series = std::iter::once(Record::new("x", f64::NAN)).collect();
        let b = a.clone();
        assert_eq!(a, b);
    }
}
