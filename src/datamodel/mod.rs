pub mod aggregated_cell;
pub mod interval;
pub mod metric_key;
pub mod metric_record;
pub mod metric_spec;

pub use aggregated_cell::AggregatedCell;
pub use interval::{IntervalLabel, days_in_interval};
pub use metric_key::{InitiationMethod, MetricKey};
pub use metric_record::MetricRecord;
pub use metric_spec::{AggregateRule, MetricSpec, Presentation};
