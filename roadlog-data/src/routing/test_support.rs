//! Test utilities for route providers.
//!
//! [`StubRouteProvider`] is a deterministic test double for
//! [`RouteProvider`] that returns a pre-configured response without making
//! HTTP requests.

use geo::{Coord, LineString};
use roadlog_core::{RouteProvider, RouteSummary, RoutingError};

/// Stub `RouteProvider` for testing.
///
/// # Example
///
/// ```
/// use geo::Coord;
/// use roadlog_core::RouteProvider;
/// use roadlog_data::routing::test_support::StubRouteProvider;
///
/// let provider = StubRouteProvider::with_distance_meters(160_934.4);
/// let route = provider.route(&[Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }])?;
/// assert!((route.distance_miles() - 100.0).abs() < 0.01);
/// # Ok::<(), roadlog_core::RoutingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StubRouteProvider {
    response: StubResponse,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Route(RouteSummary),
    Error(RoutingError),
}

impl StubRouteProvider {
    /// Create a provider that returns the given route.
    ///
    /// The route is returned for any input with at least two waypoints.
    #[must_use]
    pub const fn with_route(route: RouteSummary) -> Self {
        Self {
            response: StubResponse::Route(route),
        }
    }

    /// Create a provider that returns the given error.
    ///
    /// Fewer than two waypoints still yields
    /// `RoutingError::TooFewWaypoints`.
    #[must_use]
    pub const fn with_error(error: RoutingError) -> Self {
        Self {
            response: StubResponse::Error(error),
        }
    }

    /// Create a provider reporting `distance_meters` and a 55 mph duration,
    /// with an empty geometry replaced by the waypoints at call time.
    #[must_use]
    pub fn with_distance_meters(distance_meters: f64) -> Self {
        Self::with_route(RouteSummary {
            distance_meters,
            duration_seconds: distance_meters / 24.587,
            geometry: LineString::new(Vec::new()),
        })
    }
}

impl RouteProvider for StubRouteProvider {
    fn route(&self, waypoints: &[Coord<f64>]) -> Result<RouteSummary, RoutingError> {
        if waypoints.len() < 2 {
            return Err(RoutingError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }
        match &self.response {
            StubResponse::Route(route) if route.geometry.0.is_empty() => Ok(RouteSummary {
                geometry: LineString::from(waypoints.to_vec()),
                ..route.clone()
            }),
            StubResponse::Route(route) => Ok(route.clone()),
            StubResponse::Error(err) => Err(err.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn stub_fills_geometry_from_waypoints() {
        let provider = StubRouteProvider::with_distance_meters(1000.0);
        let waypoints = [Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }];
        let route = provider.route(&waypoints).expect("stub route");
        assert_eq!(route.geometry.0, waypoints.to_vec());
    }

    #[rstest]
    fn stub_rejects_single_waypoint() {
        let provider = StubRouteProvider::with_error(RoutingError::ParseError {
            message: "unused".to_owned(),
        });
        let err = provider
            .route(&[Coord { x: 0.0, y: 0.0 }])
            .expect_err("too few waypoints");
        assert_eq!(err, RoutingError::TooFewWaypoints { count: 1 });
    }
}
