use hifitime::{Epoch, Unit};
use std::fmt;

/// Opaque label identifying one reporting interval.
///
/// Built from the interval's start and end timestamps. Downstream components
/// only group and order on it, they never parse it back into dates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalLabel(String);

impl IntervalLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn from_epochs(start: Epoch, end: Epoch) -> Self {
        Self(format!(
            "{} to {}",
            format_epoch(start),
            format_epoch(end)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IntervalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive day count of an interval: whole days between the endpoints,
/// plus one. A week reported as `01T00:00` to `07T00:00` counts as 7 days.
pub fn days_in_interval(start: Epoch, end: Epoch) -> i64 {
    (end - start).to_unit(Unit::Day).floor() as i64 + 1
}

/// Format an epoch as `YYYY-MM-DD`, appending `HH:MM:SS` only when the
/// timestamp is not midnight. Weekly intervals thus read as plain dates.
fn format_epoch(epoch: Epoch) -> String {
    let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
    if hour == 0 && minute == 0 && second == 0 && nanos == 0 {
        format!("{:04}-{:02}-{:02}", year, month, day)
    } else {
        format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            year, month, day, hour, minute, second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_midnight_epochs() {
        let start = Epoch::from_gregorian_utc(2024, 6, 1, 0, 0, 0, 0);
        let end = Epoch::from_gregorian_utc(2024, 6, 7, 0, 0, 0, 0);
        let label = IntervalLabel::from_epochs(start, end);
        assert_eq!(label.as_str(), "2024-06-01 to 2024-06-07");
    }

    #[test]
    fn test_label_keeps_time_of_day() {
        let start = Epoch::from_gregorian_utc(2024, 6, 1, 8, 30, 0, 0);
        let end = Epoch::from_gregorian_utc(2024, 6, 1, 17, 0, 0, 0);
        let label = IntervalLabel::from_epochs(start, end);
        assert_eq!(label.as_str(), "2024-06-01 08:30:00 to 2024-06-01 17:00:00");
    }

    #[test]
    fn test_days_in_interval_is_inclusive() {
        let start = Epoch::from_gregorian_utc(2024, 6, 1, 0, 0, 0, 0);
        let end = Epoch::from_gregorian_utc(2024, 6, 7, 0, 0, 0, 0);
        assert_eq!(days_in_interval(start, end), 7);
    }

    #[test]
    fn test_days_in_interval_single_day() {
        let start = Epoch::from_gregorian_utc(2024, 6, 1, 0, 0, 0, 0);
        let end = Epoch::from_gregorian_utc(2024, 6, 1, 23, 59, 59, 0);
        assert_eq!(days_in_interval(start, end), 1);
    }
}
