//! Core domain for the roadlog Hours-of-Service trip planner.
//!
//! The centre of the crate is the schedule [`Simulator`]: given a trip
//! distance and the hours already used in the driver's 70-hour cycle, it
//! lays out a day-by-day duty log under the FMCSA property-carrying rules.
//! Every day is a contiguous midnight-to-midnight [`TimelineSegment`] list
//! reduced to per-status totals by [`summarize`].
//!
//! Around it sit the collaborator traits used by trip planning,
//! [`Geocoder`] and [`RouteProvider`], and the [`TripPlanner`] pipeline that
//! resolves place names, routes through them and simulates the result.
//! Concrete HTTP collaborators live in `roadlog-data`.
//!
//! # Examples
//!
//! ```
//! use roadlog_core::{DutyStatus, simulate};
//!
//! let schedule = simulate(1200.0, 0.0)?;
//! assert_eq!(schedule.trip_stats.trip_days, 2);
//! let first = &schedule.days[0];
//! assert_eq!(first.totals.get(DutyStatus::Driving), 11.0);
//! # Ok::<(), roadlog_core::ScheduleError>(())
//! ```

#![forbid(unsafe_code)]

pub mod clock;
mod error;
mod events;
mod geocode;
mod limits;
pub mod plan;
mod rounding;
mod routing;
mod rules;
mod schedule;
pub mod simulator;
mod summary;
mod timeline;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::hours_to_hhmm;
pub use error::{IncompleteTrip, ScheduleError};
pub use events::{FuelStopEvent, RestBreakEvent};
pub use geocode::{GeocodeError, Geocoder, Place};
pub use limits::{DriveState, LimitKind, SegmentLimits, WINDOW_MARGIN_HOURS};
pub use plan::{
    LocationField, PlanError, PlanLocations, PlanMeta, PlannedRoute, TripPlan, TripPlanner,
    TripRequest,
};
pub use routing::{METERS_TO_MILES, RouteProvider, RouteSummary, RoutingError};
pub use rules::{HosRules, RulesError};
pub use schedule::{TripSchedule, TripStats};
pub use simulator::{Simulator, simulate};
pub use summary::{DayRecord, DutyTotals, summarize};
pub use timeline::{DutyStatus, TimelineSegment};
