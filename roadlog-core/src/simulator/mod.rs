//! Day-by-day Hours-of-Service schedule simulator.
//!
//! The simulator walks a trip one calendar day at a time. Each day opens
//! with nightly rest and a pre-trip inspection, then a drive loop repeatedly
//! picks the longest driving segment allowed by [`SegmentLimits`] until a
//! daily limit, the duty window or the trip itself runs out. Breaks, fuel
//! stops, pickup and dropoff are slotted in as their triggers fire.
//!
//! The 70-hour cycle is modelled as a running counter that resets to zero
//! after a single full rest day. This is a simplification of the rolling
//! 8-day lookback and the 34-hour restart, kept on purpose.

mod day;

use log::{debug, trace, warn};

use crate::limits::{DriveState, LimitKind, SegmentLimits};
use crate::rounding::{round_miles, round_to};
use crate::{
    DayRecord, FuelStopEvent, HosRules, IncompleteTrip, RestBreakEvent, ScheduleError,
    TripSchedule, TripStats, summarize,
};
use day::DayLog;

/// Remaining distance at or below which the trip counts as driven.
pub const MILES_EPSILON: f64 = 0.01;
/// Driving stops once the clock is this close to the duty-window close.
pub const WINDOW_GUARD_HOURS: f64 = 0.05;
/// Segments shorter than this are not worth starting.
pub const MIN_SEGMENT_HOURS: f64 = 0.02;
/// A fuel point counts as reached within this many miles.
pub const FUEL_TOLERANCE_MILES: f64 = 1.0;
/// Slack for floating-point drift when comparing accumulated hours.
const HOURS_EPSILON: f64 = 1e-9;
const HOURS_PER_DAY: f64 = 24.0;

const BREAK_NOTE: &str = "30-min mandatory rest break (\u{a7}395.3(a)(3)(ii))";

/// Simulate a trip under the default FMCSA rule set.
///
/// # Errors
///
/// Returns [`ScheduleError`] when `total_miles` is negative or not finite,
/// or `cycle_hours_used` is outside `[0, 70]`.
///
/// # Examples
/// ```
/// use roadlog_core::simulate;
///
/// let schedule = simulate(50.0, 0.0)?;
/// assert_eq!(schedule.trip_stats.trip_days, 1);
/// assert!(schedule.fuel_stops.is_empty());
/// # Ok::<(), roadlog_core::ScheduleError>(())
/// ```
pub fn simulate(total_miles: f64, cycle_hours_used: f64) -> Result<TripSchedule, ScheduleError> {
    Simulator::default().simulate(total_miles, cycle_hours_used)
}

/// Hours-of-Service schedule simulator bound to a rule set.
///
/// The simulator holds no state between calls: each call to
/// [`Simulator::simulate`] is independent, deterministic and safe to run
/// concurrently from several threads.
///
/// # Examples
/// ```
/// use roadlog_core::{HosRules, Simulator};
///
/// let simulator = Simulator::new(HosRules::default().with_avg_speed_mph(60.0));
/// let schedule = simulator.simulate(1200.0, 0.0)?;
/// assert_eq!(schedule.final_cumulative_miles(), 1200);
/// assert_eq!(schedule.fuel_stops.len(), 1);
/// # Ok::<(), roadlog_core::ScheduleError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Simulator {
    rules: HosRules,
}

/// Running state carried across days.
#[derive(Debug)]
struct TripState {
    total_miles: f64,
    remaining_miles: f64,
    cumulative_miles: f64,
    cycle_used: f64,
    next_fuel_at: f64,
    pickup_done: bool,
    dropoff_done: bool,
    days: Vec<DayRecord>,
    fuel_stops: Vec<FuelStopEvent>,
    rest_stops: Vec<RestBreakEvent>,
}

impl TripState {
    fn new(total_miles: f64, cycle_hours_used: f64, fuel_interval_miles: f64) -> Self {
        Self {
            total_miles,
            remaining_miles: total_miles,
            cumulative_miles: 0.0,
            cycle_used: cycle_hours_used,
            next_fuel_at: fuel_interval_miles,
            pickup_done: false,
            dropoff_done: false,
            days: Vec::new(),
            fuel_stops: Vec::new(),
            rest_stops: Vec::new(),
        }
    }

    fn has_miles_left(&self) -> bool {
        self.remaining_miles > MILES_EPSILON
    }

    fn is_finished(&self) -> bool {
        !self.has_miles_left() && self.dropoff_done
    }
}

impl Simulator {
    /// Bind a simulator to `rules`.
    #[must_use]
    pub const fn new(rules: HosRules) -> Self {
        Self { rules }
    }

    /// The rule set in force.
    #[must_use]
    pub const fn rules(&self) -> &HosRules {
        &self.rules
    }

    /// Build the day-by-day schedule for a trip of `total_miles`, starting
    /// with `cycle_hours_used` already on the driver's cycle.
    ///
    /// The day loop stops when the trip is driven and dropped off, or after
    /// [`HosRules::max_trip_days`] days. A schedule cut short by that guard
    /// is still returned, with [`TripSchedule::incomplete`] set.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] for invalid input or an unusable rule set.
    pub fn simulate(
        &self,
        total_miles: f64,
        cycle_hours_used: f64,
    ) -> Result<TripSchedule, ScheduleError> {
        self.validate(total_miles, cycle_hours_used)?;
        let mut trip = TripState::new(total_miles, cycle_hours_used, self.rules.fuel_interval_miles);
        let mut day_num = 0_u32;
        while !trip.is_finished() && day_num < self.rules.max_trip_days {
            day_num += 1;
            let day = self.build_day(day_num, &mut trip);
            debug!(
                "day {day_num}: drove {:.2} h, odometer {} mi, cycle used {:.2} h",
                day.driven_hrs, day.cumulative_miles, trip.cycle_used
            );
            trip.days.push(day);
        }
        Ok(self.finish(trip, day_num, cycle_hours_used))
    }

    fn validate(&self, total_miles: f64, cycle_hours_used: f64) -> Result<(), ScheduleError> {
        self.rules.validate()?;
        if !(total_miles.is_finite() && total_miles >= 0.0) {
            return Err(ScheduleError::InvalidTotalMiles { value: total_miles });
        }
        if !(0.0..=self.rules.max_cycle_hours).contains(&cycle_hours_used) {
            return Err(ScheduleError::InvalidCycleHours {
                value: cycle_hours_used,
                max: self.rules.max_cycle_hours,
            });
        }
        Ok(())
    }

    fn build_day(&self, day_num: u32, trip: &mut TripState) -> DayRecord {
        let rules = &self.rules;
        let mut log = DayLog::default();
        log.off_duty_until(rules.day_start_hour, "Off duty / rest");
        log.on_duty(rules.pre_trip_hours, "Pre-trip inspection");
        if !trip.pickup_done {
            log.on_duty(rules.pickup_hours, "Pickup at shipper");
            trip.pickup_done = true;
        }

        let cycle_available = rules.max_cycle_hours - trip.cycle_used;
        if cycle_available - log.on_duty <= 0.0 {
            debug!("day {day_num}: cycle exhausted, taking a full rest day");
            log.off_duty_until(HOURS_PER_DAY, "Cycle limit reached, mandatory rest");
            trip.cycle_used = 0.0;
            return self.summarize(day_num, log, trip);
        }

        self.drive(day_num, &mut log, trip, cycle_available);

        if !trip.has_miles_left() && !trip.dropoff_done {
            if log.clock + rules.dropoff_hours + rules.post_trip_hours <= HOURS_PER_DAY {
                log.on_duty(rules.dropoff_hours, "Dropoff at consignee");
                log.on_duty(rules.post_trip_hours, "Post-trip inspection");
            } else {
                warn!("day {day_num}: no room left for dropoff; marking it done without logging it");
            }
            trip.dropoff_done = true;
        }

        if log.clock < HOURS_PER_DAY {
            log.off_duty_until(HOURS_PER_DAY, "Off duty / rest period");
        }
        // `on_duty` already includes driving, so driving hours weigh twice
        // against the cycle.
        trip.cycle_used = (trip.cycle_used + log.driven + log.on_duty).min(rules.max_cycle_hours);
        self.summarize(day_num, log, trip)
    }

    fn drive(&self, day_num: u32, log: &mut DayLog, trip: &mut TripState, cycle_available: f64) {
        let rules = &self.rules;
        let window_end = rules.window_end();
        let mut break_taken = false;

        while log.driven < rules.max_driving_hours
            && trip.has_miles_left()
            && log.clock < window_end - WINDOW_GUARD_HOURS
        {
            if !break_taken && log.driven >= rules.break_after_driving_hours - HOURS_EPSILON {
                trip.rest_stops
                    .push(RestBreakEvent::new(trip.cumulative_miles, day_num, log.clock));
                log.off_duty(rules.break_duration_hours, BREAK_NOTE);
                break_taken = true;
                if log.clock >= window_end {
                    break;
                }
            }

            let state = DriveState {
                clock: log.clock,
                driven_today: log.driven,
                on_duty_today: log.on_duty,
                cycle_available,
                miles_to_fuel: trip.next_fuel_at - trip.cumulative_miles,
                break_taken,
            };
            let limits = SegmentLimits::compute(rules, &state);
            let (kind, _) = limits.binding();
            let mut hours = limits.hours();
            // Short hops up to the fuel point or the break trigger are still
            // driven, otherwise the day would stall just shy of either.
            let short_hop = matches!(kind, LimitKind::FuelInterval | LimitKind::BreakTrigger)
                && hours > 0.0;
            if hours < MIN_SEGMENT_HOURS && !short_hop {
                break;
            }

            let mut miles = hours * rules.avg_speed_mph;
            if miles > trip.remaining_miles {
                miles = trip.remaining_miles;
                hours = miles / rules.avg_speed_mph;
            }
            trace!("day {day_num}: driving {hours:.3} h ({miles:.1} mi), bound by {kind}");
            log.drive(hours, miles);
            trip.remaining_miles -= miles;
            trip.cumulative_miles += miles;

            if trip.cumulative_miles >= trip.next_fuel_at - FUEL_TOLERANCE_MILES {
                trip.next_fuel_at += rules.fuel_interval_miles;
                if trip.has_miles_left() {
                    trip.fuel_stops.push(FuelStopEvent::new(
                        trip.cumulative_miles,
                        trip.total_miles,
                        day_num,
                        log.clock,
                    ));
                    let note = format!("Fuel stop @ ~{} mi", round_miles(trip.cumulative_miles));
                    log.on_duty(rules.fuel_stop_hours, &note);
                }
            }
        }
    }

    fn summarize(&self, day_num: u32, log: DayLog, trip: &TripState) -> DayRecord {
        summarize(
            day_num,
            log.timeline,
            log.driven,
            trip.cumulative_miles,
            self.rules.avg_speed_mph,
        )
    }

    fn finish(&self, trip: TripState, day_num: u32, cycle_hours_used: f64) -> TripSchedule {
        let incomplete = (!trip.is_finished()).then(|| IncompleteTrip {
            remaining_miles: trip.remaining_miles.max(0.0),
            days_simulated: day_num,
            dropoff_pending: !trip.dropoff_done,
        });
        if let Some(advisory) = &incomplete {
            warn!("{advisory}");
        }
        let total_driving_hrs: f64 = trip.days.iter().map(|day| day.totals.driving).sum();
        let trip_stats = TripStats {
            total_miles: round_miles(trip.total_miles),
            total_driving_hrs: round_to(total_driving_hrs, 1),
            trip_days: trip.days.len(),
            fuel_stops: trip.fuel_stops.len(),
            cycle_used_start: round_to(cycle_hours_used, 1),
            cycle_remaining: round_to((self.rules.max_cycle_hours - trip.cycle_used).max(0.0), 1),
            avg_speed_mph: self.rules.avg_speed_mph,
        };
        TripSchedule {
            days: trip.days,
            fuel_stops: trip.fuel_stops,
            rest_stops: trip.rest_stops,
            trip_stats,
            incomplete,
        }
    }
}
