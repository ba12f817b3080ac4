use crate::error::ReportError;
use hifitime::Epoch;
use serde::Deserialize;
use std::collections::HashMap;

/// Serde model of the raw metric-data API response.
///
/// Field names follow the wire format's PascalCase. Everything the pipeline
/// does not need is either ignored or kept optional so that partial
/// responses fail at normalization time with a precise error instead of a
/// deserialization one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawResponse {
    #[serde(default)]
    pub metric_results: Vec<RawIntervalResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawIntervalResult {
    /// Grouping dimensions (queue id, queue ARN). Logged, not reported.
    #[serde(default)]
    pub dimensions: HashMap<String, String>,
    pub metric_interval: Option<RawInterval>,
    #[serde(default)]
    pub collections: Vec<RawCollection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawInterval {
    pub start_time: Option<RawTimestamp>,
    pub end_time: Option<RawTimestamp>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawCollection {
    pub metric: Option<RawMetric>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawMetric {
    pub name: Option<String>,
    #[serde(default)]
    pub metric_filters: Vec<RawMetricFilter>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawMetricFilter {
    pub metric_filter_key: Option<String>,
    #[serde(default)]
    pub metric_filter_values: Vec<String>,
}

/// Timestamps arrive either as unix seconds or as an ISO 8601 string,
/// depending on how the response was serialized to disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    UnixSeconds(f64),
    Text(String),
}

impl RawTimestamp {
    pub fn to_epoch(&self, field: &str) -> Result<Epoch, ReportError> {
        match self {
            RawTimestamp::UnixSeconds(seconds) => Ok(Epoch::from_unix_seconds(*seconds)),
            RawTimestamp::Text(text) => text.trim().parse::<Epoch>().map_err(|_| {
                ReportError::missing_field(field, format!("unparsable timestamp '{}'", text))
            }),
        }
    }
}
