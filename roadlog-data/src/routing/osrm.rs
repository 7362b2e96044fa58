//! OSRM API response types for the Route service.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

/// OSRM Route API response.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"NoRoute"` - No route found between the coordinates
    /// - `"InvalidQuery"` - Invalid query parameters
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Alternative routes, best first. Absent on failure.
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl RouteResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }
}

/// A single route through all requested waypoints.
#[derive(Debug, Deserialize)]
pub struct Route {
    /// Length in metres.
    pub distance: f64,
    /// Estimated travel time in seconds.
    pub duration: f64,
    /// Full-resolution polyline, requested with `geometries=geojson`.
    pub geometry: GeoJsonLineString,
}

/// GeoJSON `LineString` geometry.
#[derive(Debug, Deserialize)]
pub struct GeoJsonLineString {
    /// `[lon, lat]` positions.
    pub coordinates: Vec<[f64; 2]>,
}
