//! Errors and advisories raised by the schedule simulator.

use thiserror::Error;

use crate::RulesError;

/// Invalid input rejected before simulation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// Trip distance was negative or not finite.
    #[error("total_miles must be a finite, non-negative number (got {value})")]
    InvalidTotalMiles {
        /// Distance supplied by the caller.
        value: f64,
    },
    /// Starting cycle hours were outside `[0, max]`.
    #[error("cycle_hours_used must be between 0 and {max} (got {value})")]
    InvalidCycleHours {
        /// Hours supplied by the caller.
        value: f64,
        /// Cycle cap from the rule set.
        max: f64,
    },
    /// The rule set cannot lay out a valid day.
    #[error("invalid rule set: {0}")]
    InvalidRules(#[from] RulesError),
}

/// Advisory attached to a schedule cut short by the day guard.
///
/// Not an error: the partial schedule is still returned and callers decide
/// whether to surface a warning.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "trip incomplete after {days_simulated} days: {remaining_miles:.1} mi remaining \
     (dropoff pending: {dropoff_pending})"
)]
pub struct IncompleteTrip {
    /// Distance still to drive when the guard stopped the simulation.
    pub remaining_miles: f64,
    /// Number of days built.
    pub days_simulated: u32,
    /// Whether the dropoff had not yet been reached.
    pub dropoff_pending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn incomplete_trip_message_mentions_progress() {
        let advisory = IncompleteTrip {
            remaining_miles: 1234.56,
            days_simulated: 14,
            dropoff_pending: true,
        };
        assert_eq!(
            advisory.to_string(),
            "trip incomplete after 14 days: 1234.6 mi remaining (dropoff pending: true)"
        );
    }

    #[rstest]
    fn cycle_error_reports_bounds() {
        let err = ScheduleError::InvalidCycleHours {
            value: 71.0,
            max: 70.0,
        };
        assert_eq!(
            err.to_string(),
            "cycle_hours_used must be between 0 and 70 (got 71)"
        );
    }
}
