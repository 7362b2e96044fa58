//! Day summarizer: reduces a day's timeline into per-status totals.

use crate::rounding::{round_miles, round_to};
use crate::{DutyStatus, TimelineSegment};

/// Hours spent in each duty status over one day.
///
/// A fully built day sums to 24 hours, give or take the two-decimal rounding
/// applied to each bucket.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DutyTotals {
    /// Off-duty hours.
    pub off_duty: f64,
    /// Sleeper-berth hours.
    pub sleeper: f64,
    /// Driving hours.
    pub driving: f64,
    /// On-duty, not driving, hours.
    pub on_duty: f64,
}

impl DutyTotals {
    /// Hours recorded against `status`.
    #[must_use]
    pub const fn get(&self, status: DutyStatus) -> f64 {
        match status {
            DutyStatus::OffDuty => self.off_duty,
            DutyStatus::Sleeper => self.sleeper,
            DutyStatus::Driving => self.driving,
            DutyStatus::OnDuty => self.on_duty,
        }
    }

    /// Sum across all four statuses.
    #[must_use]
    pub fn total(&self) -> f64 {
        DutyStatus::ALL.iter().map(|status| self.get(*status)).sum()
    }

    const fn bucket_mut(&mut self, status: DutyStatus) -> &mut f64 {
        match status {
            DutyStatus::OffDuty => &mut self.off_duty,
            DutyStatus::Sleeper => &mut self.sleeper,
            DutyStatus::Driving => &mut self.driving,
            DutyStatus::OnDuty => &mut self.on_duty,
        }
    }

    fn rounded(self, places: i32) -> Self {
        Self {
            off_duty: round_to(self.off_duty, places),
            sleeper: round_to(self.sleeper, places),
            driving: round_to(self.driving, places),
            on_duty: round_to(self.on_duty, places),
        }
    }
}

/// One simulated calendar day.
///
/// Created once by the simulator's day loop and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayRecord {
    /// 1-based position of the day within the trip.
    pub day_num: u32,
    /// Ordered, contiguous segments covering midnight to midnight.
    pub timeline: Vec<TimelineSegment>,
    /// Hours per duty status, rounded to two decimals.
    pub totals: DutyTotals,
    /// Hours driven, rounded to two decimals.
    pub driven_hrs: f64,
    /// Miles implied by `driven_hrs` at the average speed.
    pub driven_miles: u64,
    /// Trip odometer at the end of the day.
    pub cumulative_miles: u64,
}

/// Build a [`DayRecord`] from a finished timeline.
///
/// Each segment's duration is added to its status bucket. Every
/// [`DutyStatus`] owns a bucket, so nothing in a well-typed timeline is
/// dropped; a status the log sheet does not know about cannot be
/// deserialized in the first place. Hour totals are rounded half-to-even to
/// two decimals and `driven_miles` is `driven_hours × avg_speed_mph` rounded
/// to whole miles.
///
/// # Examples
/// ```
/// use roadlog_core::{DutyStatus, TimelineSegment, summarize};
///
/// let timeline = vec![
///     TimelineSegment::new(DutyStatus::OffDuty, 0.0, 6.0, "Off duty / rest"),
///     TimelineSegment::driving(6.0, 8.0, 110.0, "Driving 110 mi"),
///     TimelineSegment::new(DutyStatus::OffDuty, 8.0, 24.0, "Off duty / rest period"),
/// ];
/// let day = summarize(1, timeline, 2.0, 110.0, 55.0);
/// assert_eq!(day.totals.driving, 2.0);
/// assert_eq!(day.totals.off_duty, 22.0);
/// assert_eq!(day.driven_miles, 110);
/// ```
#[must_use]
pub fn summarize(
    day_num: u32,
    timeline: Vec<TimelineSegment>,
    driven_hours: f64,
    cumulative_miles: f64,
    avg_speed_mph: f64,
) -> DayRecord {
    let mut totals = DutyTotals::default();
    for segment in &timeline {
        *totals.bucket_mut(segment.status) += segment.duration();
    }
    DayRecord {
        day_num,
        timeline,
        totals: totals.rounded(2),
        driven_hrs: round_to(driven_hours, 2),
        driven_miles: round_miles(driven_hours * avg_speed_mph),
        cumulative_miles: round_miles(cumulative_miles),
    }
}
