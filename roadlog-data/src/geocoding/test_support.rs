//! Test utilities for geocoders.
//!
//! [`StubGeocoder`] answers from a fixed table, or fails every lookup with a
//! configured error, without making HTTP requests.

use std::collections::HashMap;

use geo::Coord;
use roadlog_core::{GeocodeError, Geocoder, Place};

/// Stub `Geocoder` for testing.
///
/// # Example
///
/// ```
/// use roadlog_core::Geocoder;
/// use roadlog_data::geocoding::test_support::StubGeocoder;
///
/// let geocoder = StubGeocoder::default().with_place("Dallas, TX", -96.797, 32.7767);
/// assert_eq!(geocoder.geocode("Dallas, TX")?.lat(), 32.7767);
/// assert!(geocoder.geocode("Atlantis").is_err());
/// # Ok::<(), roadlog_core::GeocodeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StubGeocoder {
    places: HashMap<String, Place>,
    error: Option<GeocodeError>,
}

impl StubGeocoder {
    /// Create a geocoder that fails every non-blank query with `error`.
    #[must_use]
    pub fn with_error(error: GeocodeError) -> Self {
        Self {
            places: HashMap::new(),
            error: Some(error),
        }
    }

    /// Add a place answering to exactly `query`.
    #[must_use]
    pub fn with_place(mut self, query: &str, lon: f64, lat: f64) -> Self {
        self.places
            .insert(query.to_owned(), Place::new(Coord { x: lon, y: lat }, query));
        self
    }
}

impl Geocoder for StubGeocoder {
    fn geocode(&self, query: &str) -> Result<Place, GeocodeError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        self.places
            .get(trimmed)
            .cloned()
            .ok_or_else(|| GeocodeError::NotFound {
                query: trimmed.to_owned(),
            })
    }
}
