//! `RouteProvider` over HTTP using OSRM's Route API.

use std::time::Duration;

use geo::{Coord, LineString};
use log::debug;
use roadlog_core::{RouteProvider, RouteSummary, RoutingError};

use super::osrm::RouteResponse;
use crate::http::{BlockingClient, ClientBuildError, TransportError};
use crate::DEFAULT_USER_AGENT;

/// Public OSRM demo server.
pub const DEFAULT_OSRM_BASE_URL: &str = "https://router.project-osrm.org";

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_PROFILE: &str = "driving";

/// Configuration for [`HttpRouteProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRouteProviderConfig {
    /// Base URL for the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Routing profile, `"driving"` for road freight.
    pub profile: String,
}

impl Default for HttpRouteProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OSRM_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            profile: DEFAULT_PROFILE.to_owned(),
        }
    }
}

impl HttpRouteProviderConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the routing profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }
}

/// OSRM-backed route provider.
///
/// Implements the synchronous [`RouteProvider`] trait by blocking on an
/// internal Tokio runtime, reused across calls. See
/// [`crate::ClientBuildError`] for construction failures.
#[derive(Debug)]
pub struct HttpRouteProvider {
    http: BlockingClient,
    config: HttpRouteProviderConfig,
}

impl HttpRouteProvider {
    /// Create a provider for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(HttpRouteProviderConfig::new(base_url))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpRouteProviderConfig) -> Result<Self, ClientBuildError> {
        let http = BlockingClient::new(&config.user_agent, config.timeout)?;
        Ok(Self { http, config })
    }

    /// The configuration in force.
    #[must_use]
    pub const fn config(&self) -> &HttpRouteProviderConfig {
        &self.config
    }

    /// Build the OSRM Route API URL for the given waypoints.
    ///
    /// The URL format is `{base_url}/route/v1/{profile}/{coordinates}` with
    /// semicolon-separated `lon,lat` pairs, asking for the full GeoJSON
    /// geometry and no turn-by-turn steps.
    fn build_route_url(&self, waypoints: &[Coord<f64>]) -> String {
        let coords = waypoints
            .iter()
            .map(|coord| format!("{},{}", coord.x, coord.y))
            .collect::<Vec<_>>()
            .join(";");
        format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson&steps=false",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            coords
        )
    }

    /// Convert an OSRM response to a [`RouteSummary`].
    fn convert_response(response: RouteResponse) -> Result<RouteSummary, RoutingError> {
        if !response.is_ok() {
            return Err(RoutingError::NoRoute {
                code: response.code,
                message: response.message.unwrap_or_default(),
            });
        }
        let route = response
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::ParseError {
                message: "OSRM response contained no routes".to_owned(),
            })?;
        if !(route.distance.is_finite() && route.distance >= 0.0) {
            return Err(RoutingError::ParseError {
                message: format!("OSRM returned an invalid distance: {}", route.distance),
            });
        }
        Ok(RouteSummary {
            distance_meters: route.distance,
            duration_seconds: route.duration,
            geometry: LineString::from(route.geometry.coordinates),
        })
    }
}

impl From<TransportError> for RoutingError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Timeout { url, timeout_secs } => Self::Timeout { url, timeout_secs },
            TransportError::Http {
                url,
                status,
                message,
            } => Self::HttpError {
                url,
                status,
                message,
            },
            TransportError::Network { url, message } => Self::NetworkError { url, message },
            TransportError::Parse { message } => Self::ParseError { message },
        }
    }
}

impl RouteProvider for HttpRouteProvider {
    /// Fetch the route through `waypoints`.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime must be
    /// multi-threaded for the ambient handle to be used.
    fn route(&self, waypoints: &[Coord<f64>]) -> Result<RouteSummary, RoutingError> {
        if waypoints.len() < 2 {
            return Err(RoutingError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }
        let url = self.build_route_url(waypoints);
        debug!("requesting OSRM route: {url}");
        let response: RouteResponse = self.http.get_json(&url)?;
        Self::convert_response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    use crate::routing::osrm::{GeoJsonLineString, Route};

    #[fixture]
    fn waypoints() -> Vec<Coord<f64>> {
        vec![
            Coord { x: -87.6298, y: 41.8781 },
            Coord { x: -90.1994, y: 38.627 },
            Coord { x: -96.797, y: 32.7767 },
        ]
    }

    #[fixture]
    fn provider() -> HttpRouteProvider {
        HttpRouteProvider::new("http://osrm.example.com").expect("provider should build")
    }

    #[rstest]
    fn build_route_url_formats_coordinates(provider: HttpRouteProvider, waypoints: Vec<Coord<f64>>) {
        let url = provider.build_route_url(&waypoints);

        assert_eq!(
            url,
            "http://osrm.example.com/route/v1/driving/\
             -87.6298,41.8781;-90.1994,38.627;-96.797,32.7767\
             ?overview=full&geometries=geojson&steps=false"
        );
    }

    #[rstest]
    fn build_route_url_strips_trailing_slash(waypoints: Vec<Coord<f64>>) {
        let provider = HttpRouteProvider::with_config(
            HttpRouteProviderConfig::new("http://osrm.example.com/").with_profile("truck"),
        )
        .expect("provider should build");

        let url = provider.build_route_url(&waypoints);

        assert!(url.starts_with("http://osrm.example.com/route/v1/truck/"));
        assert!(!url.contains("//route"));
    }

    #[rstest]
    fn convert_response_handles_success() {
        let response = RouteResponse {
            code: "Ok".to_owned(),
            message: None,
            routes: vec![Route {
                distance: 1_931_213.0,
                duration: 68_400.0,
                geometry: GeoJsonLineString {
                    coordinates: vec![[-87.6298, 41.8781], [-96.797, 32.7767]],
                },
            }],
        };

        let route = HttpRouteProvider::convert_response(response).expect("should parse");

        assert_eq!(route.distance_meters, 1_931_213.0);
        assert_eq!(route.duration_seconds, 68_400.0);
        assert_eq!(route.geometry.0.len(), 2);
        assert_eq!(route.geometry.0[1], Coord { x: -96.797, y: 32.7767 });
        assert!((route.distance_miles() - 1200.0).abs() < 0.1);
    }

    #[rstest]
    fn convert_response_handles_no_route() {
        let response = RouteResponse {
            code: "NoRoute".to_owned(),
            message: Some("Impossible route between points".to_owned()),
            routes: Vec::new(),
        };

        let err = HttpRouteProvider::convert_response(response).expect_err("should fail");

        assert_eq!(
            err,
            RoutingError::NoRoute {
                code: "NoRoute".to_owned(),
                message: "Impossible route between points".to_owned(),
            }
        );
    }

    #[rstest]
    #[case(Vec::new())]
    #[case(vec![Route {
        distance: f64::NAN,
        duration: 0.0,
        geometry: GeoJsonLineString { coordinates: Vec::new() },
    }])]
    fn convert_response_rejects_unusable_routes(#[case] routes: Vec<Route>) {
        let response = RouteResponse {
            code: "Ok".to_owned(),
            message: None,
            routes,
        };

        let err = HttpRouteProvider::convert_response(response).expect_err("should fail");

        assert!(matches!(err, RoutingError::ParseError { .. }));
    }

    #[rstest]
    fn single_waypoint_is_rejected(provider: HttpRouteProvider, waypoints: Vec<Coord<f64>>) {
        let err = provider.route(&waypoints[..1]).expect_err("should fail");

        assert_eq!(err, RoutingError::TooFewWaypoints { count: 1 });
    }

    #[rstest]
    fn transport_errors_map_onto_routing_errors() {
        let err = RoutingError::from(TransportError::Timeout {
            url: "http://osrm.example.com".to_owned(),
            timeout_secs: 15,
        });
        assert!(matches!(err, RoutingError::Timeout { timeout_secs: 15, .. }));
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = HttpRouteProviderConfig::new("http://example.com")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent/1.0")
            .with_profile("car");

        assert_eq!(config.base_url, "http://example.com");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "test-agent/1.0");
        assert_eq!(config.profile, "car");
    }
}
