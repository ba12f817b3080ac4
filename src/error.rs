use thiserror::Error;

/// Errors produced by the report pipeline
#[derive(Error, Debug)]
pub enum ReportError {
    /// Required field missing or unreadable in the raw metric response
    #[error("Malformed input: missing or invalid {field} in {context}")]
    MalformedInput { field: String, context: String },

    /// Two aggregated cells landed on the same (metric, interval) slot.
    /// This is an aggregator contract violation, not a data problem.
    #[error("Duplicate cell for metric '{metric}' in interval '{interval}'")]
    DuplicateCell { metric: String, interval: String },
}

impl ReportError {
    /// Create a malformed-input error with interval context
    pub fn missing_field(field: &str, context: impl Into<String>) -> Self {
        ReportError::MalformedInput {
            field: field.to_string(),
            context: context.into(),
        }
    }

    /// Create a duplicate-cell error from the offending coordinates
    pub fn duplicate_cell(metric: impl Into<String>, interval: impl Into<String>) -> Self {
        ReportError::DuplicateCell {
            metric: metric.into(),
            interval: interval.into(),
        }
    }
}
