//! Facade crate for the roadlog Hours-of-Service engine.
//!
//! This crate re-exports the core scheduling and planning types and, behind
//! the `http` feature, the OSRM and Nominatim adapters.
//!
//! ```
//! use roadlog_engine::simulate;
//!
//! let schedule = simulate(1200.0, 0.0)?;
//! assert_eq!(schedule.trip_stats.trip_days, 2);
//! # Ok::<(), roadlog_engine::ScheduleError>(())
//! ```

#![forbid(unsafe_code)]

pub use roadlog_core::{
    DayRecord, DutyStatus, DutyTotals, FuelStopEvent, GeocodeError, Geocoder, HosRules,
    IncompleteTrip, LocationField, PlanError, Place, RestBreakEvent, RouteProvider, RouteSummary,
    RoutingError, RulesError, ScheduleError, Simulator, TimelineSegment, TripPlan, TripPlanner,
    TripRequest, TripSchedule, TripStats, hours_to_hhmm, simulate, summarize,
};

#[cfg(feature = "http")]
pub use roadlog_data::{
    ClientBuildError,
    geocoding::{NominatimConfig, NominatimGeocoder},
    routing::{HttpRouteProvider, HttpRouteProviderConfig},
};

#[cfg(feature = "test-support")]
pub use roadlog_core::test_support;
