use std::fmt;

/// Initiation-method qualifier carried by some metrics as a side filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitiationMethod {
    Inbound,
    Outbound,
}

impl InitiationMethod {
    pub fn as_str(&self) -> &str {
        match self {
            InitiationMethod::Inbound => "INBOUND",
            InitiationMethod::Outbound => "OUTBOUND",
        }
    }

    /// Resolve the qualifier from a filter's value list.
    ///
    /// `INBOUND` wins over `OUTBOUND` when both are present. Any other value
    /// is ignored rather than rejected, so unrecognized filters simply leave
    /// the metric unqualified.
    pub fn from_filter_values<S: AsRef<str>>(values: &[S]) -> Option<Self> {
        if values.iter().any(|v| v.as_ref() == "INBOUND") {
            Some(InitiationMethod::Inbound)
        } else if values.iter().any(|v| v.as_ref() == "OUTBOUND") {
            Some(InitiationMethod::Outbound)
        } else {
            None
        }
    }
}

/// Canonical identity of one reported metric: the base metric name plus an
/// optional initiation-method qualifier.
///
/// This is the single place qualifier suffixing happens; the rest of the
/// pipeline treats the key as atomic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricKey {
    pub base: String,
    pub qualifier: Option<InitiationMethod>,
}

impl MetricKey {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            qualifier: None,
        }
    }

    pub fn qualified(base: impl Into<String>, qualifier: InitiationMethod) -> Self {
        Self {
            base: base.into(),
            qualifier: Some(qualifier),
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.qualifier {
            Some(qualifier) => write!(f, "{} {}", self.base, qualifier.as_str()),
            None => write!(f, "{}", self.base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_qualifier() {
        let key = MetricKey::new("CONTACTS_QUEUED");
        assert_eq!(key.to_string(), "CONTACTS_QUEUED");
    }

    #[test]
    fn test_display_with_qualifier() {
        let key = MetricKey::qualified("CONTACTS_HANDLED", InitiationMethod::Outbound);
        assert_eq!(key.to_string(), "CONTACTS_HANDLED OUTBOUND");
    }

    #[test]
    fn test_qualifier_from_filter_values() {
        assert_eq!(
            InitiationMethod::from_filter_values(&["INBOUND"]),
            Some(InitiationMethod::Inbound)
        );
        assert_eq!(
            InitiationMethod::from_filter_values(&["OUTBOUND"]),
            Some(InitiationMethod::Outbound)
        );
        // INBOUND takes precedence when both are listed
        assert_eq!(
            InitiationMethod::from_filter_values(&["OUTBOUND", "INBOUND"]),
            Some(InitiationMethod::Inbound)
        );
    }

    #[test]
    fn test_unrecognized_filter_value_gives_no_qualifier() {
        assert_eq!(
            InitiationMethod::from_filter_values(&["CALLBACK"]),
            None::<InitiationMethod>
        );
        assert_eq!(
            InitiationMethod::from_filter_values::<&str>(&[]),
            None::<InitiationMethod>
        );
    }

    #[test]
    fn test_keys_differ_by_qualifier() {
        let inbound = MetricKey::qualified("CONTACTS_HANDLED", InitiationMethod::Inbound);
        let outbound = MetricKey::qualified("CONTACTS_HANDLED", InitiationMethod::Outbound);
        assert_ne!(inbound, outbound);
    }
}
