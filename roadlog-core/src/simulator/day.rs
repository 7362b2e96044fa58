//! Append-only timeline builder for a single day.

use crate::rounding::{round_miles, round_to};
use crate::{DutyStatus, TimelineSegment};

/// A day under construction: the timeline so far plus the clock cursor.
///
/// Every segment starts where the previous one ended, so the finished
/// timeline is contiguous by construction. Zero-length segments are never
/// recorded.
#[derive(Debug, Default)]
pub(super) struct DayLog {
    pub(super) timeline: Vec<TimelineSegment>,
    pub(super) clock: f64,
    pub(super) driven: f64,
    /// Hours worked today, driving included.
    pub(super) on_duty: f64,
}

impl DayLog {
    pub(super) fn off_duty(&mut self, hours: f64, note: &str) {
        self.push(DutyStatus::OffDuty, hours, note);
    }

    pub(super) fn off_duty_until(&mut self, end: f64, note: &str) {
        self.off_duty(end - self.clock, note);
    }

    pub(super) fn on_duty(&mut self, hours: f64, note: &str) {
        self.push(DutyStatus::OnDuty, hours, note);
        self.on_duty += hours;
    }

    pub(super) fn drive(&mut self, hours: f64, miles: f64) {
        let start = self.clock;
        self.clock += hours;
        self.driven += hours;
        self.on_duty += hours;
        self.timeline.push(TimelineSegment::driving(
            start,
            self.clock,
            round_to(miles, 1),
            format!("Driving {} mi", round_miles(miles)),
        ));
    }

    fn push(&mut self, status: DutyStatus, hours: f64, note: &str) {
        if hours <= 0.0 {
            return;
        }
        let start = self.clock;
        self.clock += hours;
        self.timeline
            .push(TimelineSegment::new(status, start, self.clock, note));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn segments_are_contiguous() {
        let mut log = DayLog::default();
        log.off_duty_until(6.0, "rest");
        log.on_duty(0.5, "inspection");
        log.drive(2.0, 110.0);
        log.off_duty_until(24.0, "rest");

        let bounds: Vec<(f64, f64)> = log.timeline.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(
            bounds,
            vec![(0.0, 6.0), (6.0, 6.5), (6.5, 8.5), (8.5, 24.0)]
        );
        assert_eq!(log.driven, 2.0);
        assert_eq!(log.clock, 24.0);
    }

    #[rstest]
    fn driving_counts_as_on_duty_work() {
        let mut log = DayLog::default();
        log.on_duty(0.5, "inspection");
        log.drive(2.0, 110.0);
        log.on_duty(0.5, "fuel");
        assert_eq!(log.driven, 2.0);
        assert_eq!(log.on_duty, 3.0);
    }

    #[rstest]
    fn empty_segments_are_dropped() {
        let mut log = DayLog::default();
        log.off_duty_until(0.0, "rest");
        log.on_duty(0.0, "pickup");
        log.on_duty(0.5, "inspection");
        assert_eq!(log.timeline.len(), 1);
        let only = log.timeline.first().expect("inspection segment");
        assert_eq!((only.start, only.end), (0.0, 0.5));
        assert_eq!(log.on_duty, 0.5);
    }

    #[rstest]
    fn driving_note_rounds_miles() {
        let mut log = DayLog::default();
        log.drive(0.5, 27.54);
        let segment = log.timeline.first().expect("driving segment");
        assert_eq!(segment.note, "Driving 28 mi");
        assert_eq!(segment.miles, 27.5);
    }
}
