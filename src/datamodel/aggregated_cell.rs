use super::{IntervalLabel, MetricKey};

/// One collapsed value per distinct `(metric, interval)` pair. The
/// aggregator guarantees uniqueness; the reporter enforces it again when
/// pivoting.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedCell {
    pub key: MetricKey,
    pub interval: IntervalLabel,
    pub value: f64,
}

impl AggregatedCell {
    pub fn new(key: MetricKey, interval: IntervalLabel, value: f64) -> Self {
        Self {
            key,
            interval,
            value,
        }
    }
}
