//! Candidate limits on the length of the next driving segment.
//!
//! Each drive-loop iteration evaluates five independent constraints and
//! drives for the tightest one. Keeping the candidates as named fields makes
//! the greedy choice auditable: the simulator logs which limit bound each
//! segment, and every candidate is tested on its own.

use std::fmt;

use crate::HosRules;

/// Safety margin kept between the last driving segment and the window close.
pub const WINDOW_MARGIN_HOURS: f64 = 0.01;

/// The constraint a candidate limit comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitKind {
    /// Driving hours left before the daily driving cap.
    DailyDriving,
    /// Hours left in the duty window.
    DutyWindow,
    /// Hours until the next fuel point at the average speed.
    FuelInterval,
    /// Hours left in the on-duty cycle.
    Cycle,
    /// Driving hours until the mandatory break is due.
    BreakTrigger,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::DailyDriving => "daily driving cap",
            Self::DutyWindow => "duty window",
            Self::FuelInterval => "fuel interval",
            Self::Cycle => "cycle cap",
            Self::BreakTrigger => "break trigger",
        };
        f.write_str(label)
    }
}

/// Running state of the current day as seen by the drive loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveState {
    /// Current time of day in decimal hours.
    pub clock: f64,
    /// Hours driven so far today.
    pub driven_today: f64,
    /// On-duty hours logged so far today, driving included.
    pub on_duty_today: f64,
    /// Cycle hours available at the start of the day, before any of today's work.
    pub cycle_available: f64,
    /// Miles left until the next fuel point.
    pub miles_to_fuel: f64,
    /// Whether today's mandatory break has been taken.
    pub break_taken: bool,
}

/// The five candidate lengths, in hours, for the next driving segment.
///
/// # Examples
/// ```
/// use roadlog_core::{DriveState, HosRules, LimitKind, SegmentLimits};
///
/// let rules = HosRules::default();
/// let state = DriveState {
///     clock: 7.5,
///     driven_today: 0.0,
///     on_duty_today: 1.5,
///     cycle_available: 70.0,
///     miles_to_fuel: 1000.0,
///     break_taken: false,
/// };
/// let limits = SegmentLimits::compute(&rules, &state);
/// assert_eq!(limits.binding(), (LimitKind::BreakTrigger, 8.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLimits {
    /// Hours left before the daily driving cap.
    pub daily_driving: f64,
    /// Hours left in the duty window, less the safety margin.
    pub duty_window: f64,
    /// Hours to the next fuel point.
    pub fuel_interval: f64,
    /// Hours left in the cycle, floored at zero.
    pub cycle: f64,
    /// Hours until the break is due, or the daily-cap remainder once it is
    /// no longer pending.
    pub break_trigger: f64,
}

impl SegmentLimits {
    /// Evaluate every candidate against the current state.
    #[must_use]
    pub fn compute(rules: &HosRules, state: &DriveState) -> Self {
        let daily_driving = rules.max_driving_hours - state.driven_today;
        let duty_window = rules.window_end() - state.clock - WINDOW_MARGIN_HOURS;
        let fuel_interval = state.miles_to_fuel / rules.avg_speed_mph;
        let cycle = (state.cycle_available - state.driven_today - state.on_duty_today).max(0.0);
        let until_break = if state.break_taken {
            daily_driving
        } else {
            (rules.break_after_driving_hours - state.driven_today).max(0.0)
        };
        let break_trigger = if until_break > 0.0 {
            until_break
        } else {
            daily_driving
        };
        Self {
            daily_driving,
            duty_window,
            fuel_interval,
            cycle,
            break_trigger,
        }
    }

    /// Candidates paired with their kind, in tie-break order.
    #[must_use]
    pub const fn candidates(&self) -> [(LimitKind, f64); 5] {
        [
            (LimitKind::DailyDriving, self.daily_driving),
            (LimitKind::DutyWindow, self.duty_window),
            (LimitKind::FuelInterval, self.fuel_interval),
            (LimitKind::Cycle, self.cycle),
            (LimitKind::BreakTrigger, self.break_trigger),
        ]
    }

    /// The tightest candidate. Ties go to the earliest in [`Self::candidates`].
    #[must_use]
    pub fn binding(&self) -> (LimitKind, f64) {
        let [first, rest @ ..] = self.candidates();
        rest.into_iter()
            .fold(first, |best, next| if next.1 < best.1 { next } else { best })
    }

    /// Length of the next driving segment, never negative.
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.binding().1.max(0.0)
    }
}
