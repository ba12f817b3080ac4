use crate::datamodel::{AggregatedCell, IntervalLabel, MetricKey, MetricRecord, MetricSpec};
use std::collections::HashMap;

/// Collapse duplicate `(metric, interval)` records into one cell each,
/// using the metric's grouping rule (mean for rates, sum for counts).
///
/// Groups keep the order in which their key first appeared, so the report's
/// row and column ordering follows the raw input.
pub fn aggregate(records: Vec<MetricRecord>) -> Vec<AggregatedCell> {
    let mut index: HashMap<(MetricKey, IntervalLabel), usize> = HashMap::new();
    let mut groups: Vec<((MetricKey, IntervalLabel), Vec<f64>)> = Vec::new();

    for record in records {
        let slot = (record.key, record.interval);
        match index.get(&slot) {
            Some(&position) => groups[position].1.push(record.value),
            None => {
                index.insert(slot.clone(), groups.len());
                groups.push((slot, vec![record.value]));
            }
        }
    }

    let mut cells = Vec::with_capacity(groups.len());
    for ((key, interval), values) in groups {
        let rule = MetricSpec::lookup(&key).grouping_rule;
        // Groups are never empty by construction
        let Some(value) = rule.apply(&values) else {
            continue;
        };
        cells.push(AggregatedCell::new(key, interval, value));
    }

    tracing::debug!(cells = cells.len(), "aggregated metric records");
    cells
}
