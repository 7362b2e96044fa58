//! The simulator's result: days, stops and summary statistics.

use crate::{DayRecord, FuelStopEvent, IncompleteTrip, RestBreakEvent};

/// Summary statistics for a simulated trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripStats {
    /// Requested trip distance in whole miles.
    pub total_miles: u64,
    /// Sum of each day's driving total, rounded to one decimal.
    pub total_driving_hrs: f64,
    /// Number of days produced.
    pub trip_days: usize,
    /// Number of fuel stops taken.
    pub fuel_stops: usize,
    /// Cycle hours already used when the trip started, rounded to one decimal.
    pub cycle_used_start: f64,
    /// Cycle hours left after the last day, rounded to one decimal.
    pub cycle_remaining: f64,
    /// Average speed assumed by the simulation.
    pub avg_speed_mph: f64,
}

/// A complete multi-day trip schedule.
///
/// Serializes to the `{ days, fuel_stops, rest_stops, trip_stats }` shape
/// consumed by log-sheet renderers. [`TripSchedule::incomplete`] is kept out
/// of the serialized form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripSchedule {
    /// Simulated days in order.
    pub days: Vec<DayRecord>,
    /// Fuel stops in the order they were taken.
    pub fuel_stops: Vec<FuelStopEvent>,
    /// Mandatory breaks in the order they were taken.
    pub rest_stops: Vec<RestBreakEvent>,
    /// Summary statistics.
    pub trip_stats: TripStats,
    /// Set when the day guard stopped the simulation before the trip finished.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub incomplete: Option<IncompleteTrip>,
}

impl TripSchedule {
    /// Whether the trip reached its dropoff within the day guard.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.incomplete.is_none()
    }

    /// Odometer reading at the end of the last simulated day.
    #[must_use]
    pub fn final_cumulative_miles(&self) -> u64 {
        self.days.last().map_or(0, |day| day.cumulative_miles)
    }
}
