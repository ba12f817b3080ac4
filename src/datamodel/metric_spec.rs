use super::MetricKey;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Metric the per-day average is derived from
pub const CONTACTS_QUEUED: &str = "CONTACTS_QUEUED";
/// Synthetic metric emitted by the normalizer, never present in raw input
pub const AVG_CALLS_PER_DAY: &str = "AVG_CALLS_PER_DAY";

/// Aggregation function applied when collapsing a group of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateRule {
    Mean,
    Sum,
}

impl AggregateRule {
    /// Collapse a group of values. Returns `None` for an empty group, which
    /// keeps missing cells out of totals instead of turning them into zeros.
    pub fn apply(&self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let sum: f64 = values.iter().sum();
        match self {
            AggregateRule::Sum => Some(sum),
            AggregateRule::Mean => Some(sum / values.len() as f64),
        }
    }
}

/// How a row's values should be rendered. Rendering is a display concern
/// only and never feeds back into aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Plain number, default float display
    Plain,
    /// Rate already scaled 0-100, rendered with a `%` suffix
    Percent,
    /// Fixed number of decimal places
    Fixed,
}

impl Presentation {
    pub fn render(&self, value: f64, decimals: usize) -> String {
        match self {
            Presentation::Plain => format!("{}", value),
            Presentation::Percent => format!("{:.prec$}%", value, prec = decimals),
            Presentation::Fixed => format!("{:.prec$}", value, prec = decimals),
        }
    }
}

/// Per-metric behavior: how duplicates collapse, how the total column is
/// computed, and how the row renders. The two rules are looked up
/// independently even though they currently agree for every known metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    pub grouping_rule: AggregateRule,
    pub total_rule: AggregateRule,
    pub presentation: Presentation,
}

const RATE: MetricSpec = MetricSpec {
    grouping_rule: AggregateRule::Mean,
    total_rule: AggregateRule::Mean,
    presentation: Presentation::Percent,
};

const COUNT: MetricSpec = MetricSpec {
    grouping_rule: AggregateRule::Sum,
    total_rule: AggregateRule::Sum,
    presentation: Presentation::Plain,
};

/// Fallback for metrics not in the table. Sum is a no-op for groups of one,
/// so unknown metrics degrade gracefully instead of blocking the report.
const UNKNOWN: MetricSpec = COUNT;

static METRIC_SPECS: Lazy<HashMap<&'static str, MetricSpec>> = Lazy::new(|| {
    HashMap::from([
        ("ABANDONMENT_RATE", RATE),
        ("AGENT_ANSWER_RATE", RATE),
        ("SERVICE_LEVEL", RATE),
        (
            AVG_CALLS_PER_DAY,
            MetricSpec {
                grouping_rule: AggregateRule::Mean,
                total_rule: AggregateRule::Mean,
                presentation: Presentation::Fixed,
            },
        ),
        ("CONTACTS_ABANDONED", COUNT),
        ("CONTACTS_HANDLED", COUNT),
        (CONTACTS_QUEUED, COUNT),
    ])
});

impl MetricSpec {
    /// Look up the spec for a metric. Qualifiers do not change the rules,
    /// only the base name is consulted.
    pub fn lookup(key: &MetricKey) -> MetricSpec {
        match METRIC_SPECS.get(key.base.as_str()) {
            Some(spec) => *spec,
            None => {
                tracing::debug!(metric = %key, "unknown metric, using sum/plain defaults");
                UNKNOWN
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datamodel::InitiationMethod;

    #[test]
    fn test_rate_metrics_use_mean() {
        let spec = MetricSpec::lookup(&MetricKey::new("ABANDONMENT_RATE"));
        assert_eq!(spec.grouping_rule, AggregateRule::Mean);
        assert_eq!(spec.total_rule, AggregateRule::Mean);
        assert_eq!(spec.presentation, Presentation::Percent);
    }

    #[test]
    fn test_count_metrics_use_sum() {
        let spec = MetricSpec::lookup(&MetricKey::new("CONTACTS_ABANDONED"));
        assert_eq!(spec.grouping_rule, AggregateRule::Sum);
        assert_eq!(spec.total_rule, AggregateRule::Sum);
        assert_eq!(spec.presentation, Presentation::Plain);
    }

    #[test]
    fn test_qualifier_does_not_change_rules() {
        let plain = MetricSpec::lookup(&MetricKey::new("CONTACTS_HANDLED"));
        let qualified = MetricSpec::lookup(&MetricKey::qualified(
            "CONTACTS_HANDLED",
            InitiationMethod::Inbound,
        ));
        assert_eq!(plain, qualified);
    }

    #[test]
    fn test_unknown_metric_defaults_to_sum() {
        let spec = MetricSpec::lookup(&MetricKey::new("SOMETHING_NEW"));
        assert_eq!(spec.grouping_rule, AggregateRule::Sum);
        assert_eq!(spec.presentation, Presentation::Plain);
    }

    #[test]
    fn test_mean_of_values() {
        assert_eq!(AggregateRule::Mean.apply(&[10.0, 20.0]), Some(15.0));
    }

    #[test]
    fn test_sum_of_values() {
        assert_eq!(AggregateRule::Sum.apply(&[5.0, 7.0]), Some(12.0));
    }

    #[test]
    fn test_empty_group_aggregates_to_none() {
        assert_eq!(AggregateRule::Mean.apply(&[]), None);
        assert_eq!(AggregateRule::Sum.apply(&[]), None);
    }

    #[test]
    fn test_percent_rendering() {
        assert_eq!(Presentation::Percent.render(85.0, 2), "85.00%");
        assert_eq!(Presentation::Fixed.render(10.5, 2), "10.50");
        assert_eq!(Presentation::Plain.render(12.0, 2), "12");
    }
}
