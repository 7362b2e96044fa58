//! Route provider trait and the route summary it returns.

use geo::{Coord, LineString};

use super::error::RoutingError;

/// Statute miles per metre.
pub const METERS_TO_MILES: f64 = 0.000_621_371;

/// Distance, duration and geometry of a driving route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    /// Route length in metres.
    pub distance_meters: f64,
    /// Expected driving time in seconds, as estimated by the service.
    pub duration_seconds: f64,
    /// Route polyline with `x = lon`, `y = lat`.
    pub geometry: LineString<f64>,
}

impl RouteSummary {
    /// Route length in statute miles.
    ///
    /// # Examples
    /// ```
    /// use geo::LineString;
    /// use roadlog_core::RouteSummary;
    ///
    /// let route = RouteSummary {
    ///     distance_meters: 1609.344,
    ///     duration_seconds: 60.0,
    ///     geometry: LineString::new(Vec::new()),
    /// };
    /// assert!((route.distance_miles() - 1.0).abs() < 1e-3);
    /// ```
    #[must_use]
    pub fn distance_miles(&self) -> f64 {
        self.distance_meters * METERS_TO_MILES
    }
}

/// Fetch a driving route through an ordered list of waypoints.
///
/// Implementers must visit the waypoints in the order given and return a
/// single route covering all legs.
///
/// # Examples
///
/// ```rust
/// use geo::{Coord, LineString};
/// use roadlog_core::{RouteProvider, RouteSummary, RoutingError};
///
/// struct StraightLine;
///
/// impl RouteProvider for StraightLine {
///     fn route(&self, waypoints: &[Coord<f64>]) -> Result<RouteSummary, RoutingError> {
///         if waypoints.len() < 2 {
///             return Err(RoutingError::TooFewWaypoints { count: waypoints.len() });
///         }
///         Ok(RouteSummary {
///             distance_meters: 1000.0,
///             duration_seconds: 60.0,
///             geometry: LineString::from(waypoints.to_vec()),
///         })
///     }
/// }
///
/// let a = Coord { x: -87.6, y: 41.9 };
/// let b = Coord { x: -86.2, y: 39.8 };
/// let route = StraightLine.route(&[a, b])?;
/// assert_eq!(route.geometry.0.len(), 2);
/// # Ok::<(), RoutingError>(())
/// ```
pub trait RouteProvider {
    /// Return the route through `waypoints`.
    ///
    /// Implementations must return `Err(RoutingError::TooFewWaypoints)` when
    /// fewer than two waypoints are supplied.
    fn route(&self, waypoints: &[Coord<f64>]) -> Result<RouteSummary, RoutingError>;
}

impl<T: RouteProvider + ?Sized> RouteProvider for Box<T> {
    fn route(&self, waypoints: &[Coord<f64>]) -> Result<RouteSummary, RoutingError> {
        (**self).route(waypoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::StraightLineRouter;

    #[rstest]
    fn converts_metres_to_miles() {
        let route = RouteSummary {
            distance_meters: 100_000.0,
            duration_seconds: 3600.0,
            geometry: LineString::new(Vec::new()),
        };
        assert!((route.distance_miles() - 62.1371).abs() < 1e-9);
    }

    #[rstest]
    fn stub_router_requires_two_waypoints() {
        let err = StraightLineRouter::default()
            .route(&[Coord { x: 0.0, y: 0.0 }])
            .expect_err("single waypoint should fail");
        assert_eq!(err, RoutingError::TooFewWaypoints { count: 1 });
    }

    #[rstest]
    fn stub_router_follows_waypoints() {
        let waypoints = [
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
        ];
        let route = StraightLineRouter::default()
            .route(&waypoints)
            .expect("route should build");
        assert_eq!(route.geometry.0, waypoints.to_vec());
        assert!(route.distance_meters > 0.0);
    }
}
