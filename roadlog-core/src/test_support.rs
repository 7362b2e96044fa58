//! Deterministic, in-memory collaborators used by unit and behaviour tests.

use std::collections::HashMap;

use geo::{Coord, LineString};

use crate::{GeocodeError, Geocoder, Place, RouteProvider, RouteSummary, RoutingError};

/// Metres per degree along a meridian, used for flat-earth leg lengths.
const METERS_PER_DEGREE: f64 = 111_320.0;
/// Roughly 55 mph in metres per second.
const STUB_SPEED_MPS: f64 = 24.587;

/// `Geocoder` backed by a fixed lookup table.
///
/// Queries are matched case-insensitively after trimming.
#[derive(Debug, Default, Clone)]
pub struct TableGeocoder {
    places: HashMap<String, Place>,
}

impl TableGeocoder {
    /// Add a place answering to `query`.
    #[must_use]
    pub fn with_place(mut self, query: &str, lon: f64, lat: f64) -> Self {
        let place = Place::new(Coord { x: lon, y: lat }, query.trim());
        self.places.insert(normalise(query), place);
        self
    }

    /// Table preloaded with a handful of Midwest freight hubs.
    #[must_use]
    pub fn midwest() -> Self {
        Self::default()
            .with_place("Chicago, IL", -87.6298, 41.8781)
            .with_place("St. Louis, MO", -90.1994, 38.6270)
            .with_place("Indianapolis, IN", -86.1581, 39.7684)
            .with_place("Dallas, TX", -96.7970, 32.7767)
    }
}

fn normalise(query: &str) -> String {
    query.trim().to_lowercase()
}

impl Geocoder for TableGeocoder {
    fn geocode(&self, query: &str) -> Result<Place, GeocodeError> {
        if query.trim().is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }
        self.places
            .get(&normalise(query))
            .cloned()
            .ok_or_else(|| GeocodeError::NotFound {
                query: query.to_owned(),
            })
    }
}

/// `RouteProvider` that joins waypoints with straight legs.
///
/// Leg lengths use a flat-earth approximation, which is plenty for
/// exercising the planner without a road network.
#[derive(Debug, Default, Clone, Copy)]
pub struct StraightLineRouter;

impl RouteProvider for StraightLineRouter {
    fn route(&self, waypoints: &[Coord<f64>]) -> Result<RouteSummary, RoutingError> {
        if waypoints.len() < 2 {
            return Err(RoutingError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }
        let distance_meters: f64 = waypoints
            .iter()
            .zip(waypoints.iter().skip(1))
            .map(|(from, to)| {
                let dx = (to.x - from.x) * from.y.to_radians().cos();
                let dy = to.y - from.y;
                dx.hypot(dy) * METERS_PER_DEGREE
            })
            .sum();
        Ok(RouteSummary {
            distance_meters,
            duration_seconds: distance_meters / STUB_SPEED_MPS,
            geometry: LineString::from(waypoints.to_vec()),
        })
    }
}

/// `RouteProvider` returning a fixed distance regardless of waypoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDistanceRouter {
    /// Distance reported for every route, in metres.
    pub distance_meters: f64,
}

impl FixedDistanceRouter {
    /// Router reporting `miles` statute miles.
    #[must_use]
    pub fn miles(miles: f64) -> Self {
        Self {
            distance_meters: miles / crate::METERS_TO_MILES,
        }
    }
}

impl RouteProvider for FixedDistanceRouter {
    fn route(&self, waypoints: &[Coord<f64>]) -> Result<RouteSummary, RoutingError> {
        StraightLineRouter.route(waypoints).map(|route| RouteSummary {
            distance_meters: self.distance_meters,
            duration_seconds: self.distance_meters / STUB_SPEED_MPS,
            ..route
        })
    }
}

/// `RouteProvider` that always fails with the given error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailingRouter {
    /// Error returned from every call.
    pub error: RoutingError,
}

impl RouteProvider for FailingRouter {
    fn route(&self, _waypoints: &[Coord<f64>]) -> Result<RouteSummary, RoutingError> {
        Err(self.error.clone())
    }
}
