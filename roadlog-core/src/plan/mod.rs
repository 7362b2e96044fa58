//! Trip planning: geocode, route, then simulate.
//!
//! [`TripPlanner`] glues a [`Geocoder`](crate::Geocoder) and a
//! [`RouteProvider`](crate::RouteProvider) to the schedule
//! [`Simulator`](crate::Simulator). A [`TripRequest`] names the driver's
//! current position, the shipper and the consignee; the planner resolves
//! each, routes through them in that order and lays out the HOS schedule
//! for the routed distance.

mod error;
mod planner;
mod request;

pub use error::{LocationField, PlanError};
pub use planner::{PlanLocations, PlanMeta, PlannedRoute, TripPlan, TripPlanner};
pub use request::{DEFAULT_CARRIER_NAME, DEFAULT_DRIVER_NAME, TripRequest};
