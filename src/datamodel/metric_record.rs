use super::{IntervalLabel, MetricKey};

/// One flattened observation produced by the normalizer: a metric value
/// attached to a reporting interval. Immutable once emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub key: MetricKey,
    pub value: f64,
    pub interval: IntervalLabel,
}

impl MetricRecord {
    pub fn new(key: MetricKey, value: f64, interval: IntervalLabel) -> Self {
        Self {
            key,
            value,
            interval,
        }
    }
}
