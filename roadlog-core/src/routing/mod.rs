//! Driving routes between geocoded waypoints.
//!
//! The [`RouteProvider`] trait abstracts the road-network lookup that turns
//! an ordered list of waypoints into a single driving route. Callers supply
//! `lon/lat` coordinates and receive the route's distance, duration and
//! geometry as a [`RouteSummary`].

mod error;
mod provider;

pub use error::RoutingError;
pub use provider::{METERS_TO_MILES, RouteProvider, RouteSummary};
