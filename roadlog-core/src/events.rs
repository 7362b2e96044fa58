//! Point-in-time stop markers collected across the whole trip.

use crate::clock::hours_to_hhmm;
use crate::rounding::round_miles;

/// A fuel stop taken when the odometer reaches a fuel-interval multiple.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuelStopEvent {
    /// Trip odometer at the stop, in whole miles.
    pub miles_in: u64,
    /// Day on which the stop happened.
    pub day: u32,
    /// Time of day in decimal hours.
    pub time: f64,
    /// `time` rendered as `H:MM AM/PM`.
    pub time_str: String,
    /// Share of the trip completed at the stop, in `[0, 1]` for non-trivial trips.
    pub fraction: f64,
}

impl FuelStopEvent {
    pub(crate) fn new(cumulative_miles: f64, total_miles: f64, day: u32, time: f64) -> Self {
        Self {
            miles_in: round_miles(cumulative_miles),
            day,
            time,
            time_str: hours_to_hhmm(time),
            fraction: cumulative_miles / total_miles.max(1.0),
        }
    }
}

/// A mandatory rest break taken after the break-trigger driving hours.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestBreakEvent {
    /// Trip odometer at the break, in whole miles.
    pub miles_in: u64,
    /// Day on which the break happened.
    pub day: u32,
    /// Time of day in decimal hours.
    pub time: f64,
    /// `time` rendered as `H:MM AM/PM`.
    pub time_str: String,
}

impl RestBreakEvent {
    pub(crate) fn new(cumulative_miles: f64, day: u32, time: f64) -> Self {
        Self {
            miles_in: round_miles(cumulative_miles),
            day,
            time,
            time_str: hours_to_hhmm(time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fuel_stop_records_progress() {
        let event = FuelStopEvent::new(1000.0, 1200.0, 2, 12.5);
        assert_eq!(event.miles_in, 1000);
        assert_eq!(event.day, 2);
        assert_eq!(event.time_str, "12:30 PM");
        assert!((event.fraction - 1000.0 / 1200.0).abs() < 1e-12);
    }

    #[rstest]
    fn fuel_fraction_guards_tiny_trips() {
        let event = FuelStopEvent::new(0.5, 0.5, 1, 7.0);
        assert_eq!(event.fraction, 0.5);
    }

    #[rstest]
    fn rest_break_formats_time() {
        let event = RestBreakEvent::new(440.2, 1, 15.5);
        assert_eq!(event.miles_in, 440);
        assert_eq!(event.time_str, "3:30 PM");
    }
}
