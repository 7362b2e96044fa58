//! `Geocoder` over HTTP using the Nominatim search API.

use std::time::Duration;

use log::debug;
use roadlog_core::{GeocodeError, Geocoder, Place};
use url::Url;

use super::nominatim::SearchResult;
use crate::DEFAULT_USER_AGENT;
use crate::http::{BlockingClient, ClientBuildError, TransportError};

/// Public OpenStreetMap Nominatim instance.
pub const DEFAULT_NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`NominatimGeocoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim service.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests. Nominatim's usage policy requires
    /// one that identifies the application.
    pub user_agent: String,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NOMINATIM_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl NominatimConfig {
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
}

/// Nominatim-backed geocoder.
///
/// Takes the single best match for each query and shortens its name to
/// `"City, State, CC"`.
///
/// # Example
///
/// ```no_run
/// use roadlog_core::Geocoder;
/// use roadlog_data::geocoding::NominatimGeocoder;
///
/// let geocoder = NominatimGeocoder::new("https://nominatim.openstreetmap.org")?;
/// let place = geocoder.geocode("St. Louis, MO")?;
/// println!("{} at {}, {}", place.name, place.lat(), place.lon());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct NominatimGeocoder {
    http: BlockingClient,
    config: NominatimConfig,
}

impl NominatimGeocoder {
    /// Create a geocoder for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(NominatimConfig::new(base_url))
    }

    /// Create a geocoder with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: NominatimConfig) -> Result<Self, ClientBuildError> {
        let http = BlockingClient::new(&config.user_agent, config.timeout)?;
        Ok(Self { http, config })
    }

    /// The configuration in force.
    #[must_use]
    pub const fn config(&self) -> &NominatimConfig {
        &self.config
    }

    /// Build the search URL for `query`, form-encoding the query text.
    fn build_search_url(&self, query: &str) -> Result<String, GeocodeError> {
        let endpoint = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let url = Url::parse_with_params(
            &endpoint,
            [
                ("format", "json"),
                ("limit", "1"),
                ("addressdetails", "1"),
                ("q", query),
            ],
        )
        .map_err(|err| GeocodeError::NetworkError {
            url: endpoint.clone(),
            message: format!("invalid base URL: {err}"),
        })?;
        Ok(url.into())
    }

    /// Convert the search results into a [`Place`].
    fn convert_response(query: &str, results: Vec<SearchResult>) -> Result<Place, GeocodeError> {
        let best = results
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NotFound {
                query: query.to_owned(),
            })?;
        let location = best
            .coordinate()
            .map_err(|message| GeocodeError::ParseError { message })?;
        Ok(Place::new(location, best.short_name()))
    }
}

impl From<TransportError> for GeocodeError {
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

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, query: &str) -> Result<Place, GeocodeError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }
        let url = self.build_search_url(trimmed)?;
        debug!("requesting Nominatim search: {url}");
        let results: Vec<SearchResult> = self.http.get_json(&url)?;
        Self::convert_response(trimmed, results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use crate::geocoding::nominatim::Address;
    use rstest::{fixture, rstest};

    #[fixture]
    fn geocoder() -> NominatimGeocoder {
        NominatimGeocoder::new("http://nominatim.example.com/").expect("geocoder should build")
    }

    fn result(lat: &str, lon: &str) -> SearchResult {
        SearchResult {
            lat: lat.to_owned(),
            lon: lon.to_owned(),
            display_name: "Dallas, Dallas County, Texas, United States".to_owned(),
            address: Address {
                city: Some("Dallas".to_owned()),
                state: Some("Texas".to_owned()),
                country_code: Some("us".to_owned()),
                ..Default::default()
            },
        }
    }

    #[rstest]
    fn build_search_url_encodes_the_query(geocoder: NominatimGeocoder) {
        let url = geocoder
            .build_search_url("St. Louis, MO")
            .expect("valid url");

        assert_eq!(
            url,
            "http://nominatim.example.com/search\
             ?format=json&limit=1&addressdetails=1&q=St.+Louis%2C+MO"
        );
    }

    #[rstest]
    fn convert_response_takes_the_first_match() {
        let place = NominatimGeocoder::convert_response(
            "Dallas, TX",
            vec![result("32.7762719", "-96.7968559"), result("0", "0")],
        )
        .expect("should convert");

        assert_eq!(place.name, "Dallas, Texas, US");
        assert_eq!(place.location, Coord { x: -96.796_855_9, y: 32.776_271_9 });
    }

    #[rstest]
    fn convert_response_reports_empty_results() {
        let err = NominatimGeocoder::convert_response("Atlantis", Vec::new())
            .expect_err("should fail");

        assert_eq!(
            err,
            GeocodeError::NotFound {
                query: "Atlantis".to_owned()
            }
        );
    }

    #[rstest]
    fn convert_response_rejects_bad_coordinates() {
        let err = NominatimGeocoder::convert_response("x", vec![result("lat", "lon")])
            .expect_err("should fail");

        assert!(matches!(err, GeocodeError::ParseError { .. }));
    }

    #[rstest]
    #[case("")]
    #[case("  \t")]
    fn blank_queries_are_rejected_without_a_request(geocoder: NominatimGeocoder, #[case] query: &str) {
        assert_eq!(geocoder.geocode(query), Err(GeocodeError::EmptyQuery));
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = NominatimConfig::new("http://example.com")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.base_url, "http://example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }
}
