//! Hours-of-Service rule table driving the schedule simulator.
//!
//! [`HosRules::default`] encodes the FMCSA property-carrying limits
//! (49 CFR Part 395, 70 hours over 8 days) together with the operational
//! trip assumptions used when laying out a day: average speed, fuel interval
//! and the fixed durations of inspections, pickup and dropoff.

use thiserror::Error;

/// Regulatory limits and trip assumptions consumed by the simulator.
///
/// All durations are decimal hours and all distances are statute miles.
///
/// # Examples
/// ```
/// use roadlog_core::HosRules;
///
/// let rules = HosRules::default().with_avg_speed_mph(60.0);
/// assert_eq!(rules.max_driving_hours, 11.0);
/// assert_eq!(rules.avg_speed_mph, 60.0);
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HosRules {
    /// Maximum driving hours within one duty period.
    pub max_driving_hours: f64,
    /// Length of the duty window measured from the start of the shift.
    pub duty_window_hours: f64,
    /// Minimum off-duty hours before the next shift.
    ///
    /// Informational: the fixed daily layout always provides at least this
    /// much rest, so the simulator never checks it independently.
    pub min_off_duty_hours: f64,
    /// Cumulative driving hours after which a break is mandatory.
    pub break_after_driving_hours: f64,
    /// Length of the mandatory break.
    pub break_duration_hours: f64,
    /// Cycle cap on on-duty hours.
    pub max_cycle_hours: f64,
    /// Days in the rolling cycle window.
    ///
    /// Informational: the simulator uses a running counter with a single-day
    /// reset and never looks back over this window.
    pub cycle_window_days: u32,
    /// Average road speed.
    pub avg_speed_mph: f64,
    /// Distance between fuel stops.
    pub fuel_interval_miles: f64,
    /// Length of a fuel stop.
    pub fuel_stop_hours: f64,
    /// Time spent loading at the shipper.
    pub pickup_hours: f64,
    /// Time spent unloading at the consignee.
    pub dropoff_hours: f64,
    /// Pre-trip inspection performed at the start of every day.
    pub pre_trip_hours: f64,
    /// Post-trip inspection performed after dropoff.
    pub post_trip_hours: f64,
    /// Hour of day (24-hour clock) at which each shift begins.
    pub day_start_hour: f64,
    /// Runaway guard: the simulation never builds more days than this.
    pub max_trip_days: u32,
}

impl Default for HosRules {
    fn default() -> Self {
        Self {
            max_driving_hours: 11.0,
            duty_window_hours: 14.0,
            min_off_duty_hours: 10.0,
            break_after_driving_hours: 8.0,
            break_duration_hours: 0.5,
            max_cycle_hours: 70.0,
            cycle_window_days: 8,
            avg_speed_mph: 55.0,
            fuel_interval_miles: 1000.0,
            fuel_stop_hours: 0.5,
            pickup_hours: 1.0,
            dropoff_hours: 1.0,
            pre_trip_hours: 0.5,
            post_trip_hours: 0.25,
            day_start_hour: 6.0,
            max_trip_days: 14,
        }
    }
}

/// Errors returned by [`HosRules::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RulesError {
    /// A limit that must be strictly positive was zero, negative or not finite.
    #[error("{field} must be a positive, finite number (got {value})")]
    NonPositive {
        /// Name of the offending rule.
        field: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// A duration was negative or not finite.
    #[error("{field} must be a non-negative, finite number (got {value})")]
    Negative {
        /// Name of the offending rule.
        field: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// The morning routine does not fit between the shift start and midnight.
    #[error("shift starting at {day_start_hour} leaves no room in the day")]
    DayOverflow {
        /// Configured shift start.
        day_start_hour: f64,
    },
    /// The duty window would run past midnight.
    #[error("duty window of {duty_window_hours} h starting at {day_start_hour} runs past midnight")]
    WindowPastMidnight {
        /// Configured shift start.
        day_start_hour: f64,
        /// Configured duty window.
        duty_window_hours: f64,
    },
    /// A fuel stop or break started just before the window closes would run
    /// past midnight.
    #[error("a {stop_hours} h stop at the {window_end} window close runs past midnight")]
    StopPastMidnight {
        /// Hour at which the duty window closes.
        window_end: f64,
        /// Longer of the fuel stop and the break.
        stop_hours: f64,
    },
    /// The runaway guard would stop the simulation before the first day.
    #[error("max_trip_days must be at least 1")]
    NoDays,
}

impl HosRules {
    /// Hour of day at which the duty window closes.
    ///
    /// # Examples
    /// ```
    /// use roadlog_core::HosRules;
    ///
    /// assert_eq!(HosRules::default().window_end(), 20.0);
    /// ```
    #[must_use]
    pub fn window_end(&self) -> f64 {
        self.day_start_hour + self.duty_window_hours
    }

    /// Replace the average speed.
    #[must_use]
    pub const fn with_avg_speed_mph(mut self, mph: f64) -> Self {
        self.avg_speed_mph = mph;
        self
    }

    /// Replace the fuel interval.
    #[must_use]
    pub const fn with_fuel_interval_miles(mut self, miles: f64) -> Self {
        self.fuel_interval_miles = miles;
        self
    }

    /// Replace the cycle cap.
    #[must_use]
    pub const fn with_max_cycle_hours(mut self, hours: f64) -> Self {
        self.max_cycle_hours = hours;
        self
    }

    /// Replace the runaway guard.
    #[must_use]
    pub const fn with_max_trip_days(mut self, days: u32) -> Self {
        self.max_trip_days = days;
        self
    }

    /// Check the rule set can lay out at least one valid day.
    ///
    /// # Errors
    ///
    /// Returns the first offending rule as a [`RulesError`].
    pub fn validate(&self) -> Result<(), RulesError> {
        for (field, value) in [
            ("max_driving_hours", self.max_driving_hours),
            ("duty_window_hours", self.duty_window_hours),
            ("max_cycle_hours", self.max_cycle_hours),
            ("avg_speed_mph", self.avg_speed_mph),
            ("fuel_interval_miles", self.fuel_interval_miles),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(RulesError::NonPositive { field, value });
            }
        }
        for (field, value) in [
            ("min_off_duty_hours", self.min_off_duty_hours),
            ("break_after_driving_hours", self.break_after_driving_hours),
            ("break_duration_hours", self.break_duration_hours),
            ("fuel_stop_hours", self.fuel_stop_hours),
            ("pickup_hours", self.pickup_hours),
            ("dropoff_hours", self.dropoff_hours),
            ("pre_trip_hours", self.pre_trip_hours),
            ("post_trip_hours", self.post_trip_hours),
            ("day_start_hour", self.day_start_hour),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(RulesError::Negative { field, value });
            }
        }
        if self.day_start_hour + self.pre_trip_hours + self.pickup_hours >= 24.0 {
            return Err(RulesError::DayOverflow {
                day_start_hour: self.day_start_hour,
            });
        }
        if self.window_end() > 24.0 {
            return Err(RulesError::WindowPastMidnight {
                day_start_hour: self.day_start_hour,
                duty_window_hours: self.duty_window_hours,
            });
        }
        let stop_hours = self.fuel_stop_hours.max(self.break_duration_hours);
        if self.window_end() + stop_hours > 24.0 {
            return Err(RulesError::StopPastMidnight {
                window_end: self.window_end(),
                stop_hours,
            });
        }
        if self.max_trip_days == 0 {
            return Err(RulesError::NoDays);
        }
        Ok(())
    }
}
