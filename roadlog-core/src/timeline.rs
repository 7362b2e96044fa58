//! Duty statuses and the contiguous time blocks that make up a log day.

use std::fmt;

/// Duty status recorded on a driver's daily log.
///
/// The serialized names (`off_duty`, `sleeper`, `driving`, `on_duty`) are the
/// wire contract consumed by log-sheet renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DutyStatus {
    /// Off duty, including the mandatory break and nightly rest.
    OffDuty,
    /// Sleeper berth. Never emitted by the simulator but kept as a log row.
    Sleeper,
    /// Driving.
    Driving,
    /// On duty, not driving: inspections, pickup, dropoff and fuelling.
    OnDuty,
}

impl DutyStatus {
    /// Every status in log-sheet row order.
    pub const ALL: [Self; 4] = [Self::OffDuty, Self::Sleeper, Self::Driving, Self::OnDuty];

    /// Wire name of the status.
    ///
    /// # Examples
    /// ```
    /// use roadlog_core::DutyStatus;
    ///
    /// assert_eq!(DutyStatus::OnDuty.as_str(), "on_duty");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OffDuty => "off_duty",
            Self::Sleeper => "sleeper",
            Self::Driving => "driving",
            Self::OnDuty => "on_duty",
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One contiguous block of time within a single day.
///
/// `start` and `end` are decimal hours since midnight with
/// `0 <= start < end <= 24`. `note` is a human-readable label and carries no
/// meaning for the algorithm.
///
/// # Examples
/// ```
/// use roadlog_core::{DutyStatus, TimelineSegment};
///
/// let segment = TimelineSegment::new(DutyStatus::OnDuty, 6.0, 6.5, "Pre-trip inspection");
/// assert_eq!(segment.duration(), 0.5);
/// assert_eq!(segment.miles, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineSegment {
    /// Duty status for the whole block.
    pub status: DutyStatus,
    /// Start of the block in decimal hours.
    pub start: f64,
    /// End of the block in decimal hours.
    pub end: f64,
    /// Diagnostic label.
    pub note: String,
    /// Distance covered; zero for every non-driving block.
    pub miles: f64,
}

impl TimelineSegment {
    /// Construct a non-driving segment.
    pub fn new(status: DutyStatus, start: f64, end: f64, note: impl Into<String>) -> Self {
        Self {
            status,
            start,
            end,
            note: note.into(),
            miles: 0.0,
        }
    }

    /// Construct a driving segment covering `miles`.
    pub fn driving(start: f64, end: f64, miles: f64, note: impl Into<String>) -> Self {
        Self {
            status: DutyStatus::Driving,
            start,
            end,
            note: note.into(),
            miles,
        }
    }

    /// Length of the block in hours.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DutyStatus::OffDuty, "off_duty")]
    #[case(DutyStatus::Sleeper, "sleeper")]
    #[case(DutyStatus::Driving, "driving")]
    #[case(DutyStatus::OnDuty, "on_duty")]
    fn display_uses_wire_names(#[case] status: DutyStatus, #[case] expected: &str) {
        assert_eq!(status.to_string(), expected);
    }

    #[rstest]
    fn driving_segment_keeps_miles() {
        let segment = TimelineSegment::driving(6.5, 8.5, 110.0, "Driving 110 mi");
        assert_eq!(segment.status, DutyStatus::Driving);
        assert_eq!(segment.duration(), 2.0);
        assert_eq!(segment.miles, 110.0);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn status_serializes_as_snake_case() {
        let json = serde_json::to_string(&DutyStatus::OffDuty).expect("serialize status");
        assert_eq!(json, "\"off_duty\"");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn unknown_status_is_rejected_at_the_boundary() {
        let result = serde_json::from_str::<DutyStatus>("\"personal_conveyance\"");
        assert!(result.is_err());
    }
}
