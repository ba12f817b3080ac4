use crate::datamodel::{
    InitiationMethod, IntervalLabel, MetricKey, MetricRecord, days_in_interval,
    metric_spec::{AVG_CALLS_PER_DAY, CONTACTS_QUEUED},
};
use crate::error::ReportError;

pub mod raw;

pub use raw::RawResponse;

use raw::{RawIntervalResult, RawMetricFilter};

/// Flatten a raw metric response into a uniform record sequence.
///
/// One record per collection value, with the initiation-method qualifier
/// folded into the metric key, plus a derived `AVG_CALLS_PER_DAY` record for
/// every queued-contacts value. Pure: no state survives between calls.
pub fn normalize(response: &RawResponse) -> Result<Vec<MetricRecord>, ReportError> {
    let mut records = Vec::new();
    for result in &response.metric_results {
        normalize_interval_result(result, &mut records)?;
    }
    tracing::debug!(records = records.len(), "normalized raw metric response");
    Ok(records)
}

fn normalize_interval_result(
    result: &RawIntervalResult,
    records: &mut Vec<MetricRecord>,
) -> Result<(), ReportError> {
    let raw_interval = result
        .metric_interval
        .as_ref()
        .ok_or_else(|| ReportError::missing_field("MetricInterval", "interval result"))?;
    let start = raw_interval
        .start_time
        .as_ref()
        .ok_or_else(|| ReportError::missing_field("StartTime", "metric interval"))?
        .to_epoch("StartTime")?;
    let end = raw_interval
        .end_time
        .as_ref()
        .ok_or_else(|| ReportError::missing_field("EndTime", "metric interval"))?
        .to_epoch("EndTime")?;

    let interval = IntervalLabel::from_epochs(start, end);
    let days = days_in_interval(start, end);

    if !result.dimensions.is_empty() {
        tracing::info!(
            interval = %interval,
            dimensions = ?result.dimensions,
            "processing interval result"
        );
    }

    for collection in &result.collections {
        let metric = collection
            .metric
            .as_ref()
            .ok_or_else(|| ReportError::missing_field("Metric", interval.as_str()))?;
        let name = metric
            .name
            .as_deref()
            .ok_or_else(|| ReportError::missing_field("Metric.Name", interval.as_str()))?;
        let Some(value) = collection.value else {
            tracing::warn!(metric = name, interval = %interval, "collection without value, skipping");
            continue;
        };

        let key = match initiation_method(&metric.metric_filters) {
            Some(qualifier) => MetricKey::qualified(name, qualifier),
            None => MetricKey::new(name),
        };

        records.push(MetricRecord::new(key.clone(), value, interval.clone()));

        // Derived metric: daily average of queued contacts over the
        // interval's inclusive day count. Never carries a qualifier.
        if key.base == CONTACTS_QUEUED {
            records.push(MetricRecord::new(
                MetricKey::new(AVG_CALLS_PER_DAY),
                value / days as f64,
                interval.clone(),
            ));
        }
    }

    Ok(())
}

/// Resolve the initiation-method qualifier from a metric's filters. Filters
/// with other keys, and values outside INBOUND/OUTBOUND, are passed through
/// without a qualifier.
fn initiation_method(filters: &[RawMetricFilter]) -> Option<InitiationMethod> {
    filters
        .iter()
        .filter(|filter| filter.metric_filter_key.as_deref() == Some("INITIATION_METHOD"))
        .find_map(|filter| InitiationMethod::from_filter_values(&filter.metric_filter_values))
}
