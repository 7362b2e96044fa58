//! Resolve free-text place names to coordinates.
//!
//! The [`Geocoder`] trait abstracts the search service used by the trip
//! planner. A query such as `"Chicago, IL"` resolves to a [`Place`]: a
//! `lon/lat` coordinate plus a short display name suitable for log sheets.

use geo::Coord;
use thiserror::Error;

/// A geocoded location.
///
/// Serializes flat as `{ "lat", "lon", "name" }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "PlaceRecord", into = "PlaceRecord"))]
pub struct Place {
    /// Position with `x = lon`, `y = lat`.
    pub location: Coord<f64>,
    /// Short display name, for example `"Chicago, Illinois, US"`.
    pub name: String,
}

impl Place {
    /// Construct a place from its parts.
    #[must_use]
    pub fn new(location: Coord<f64>, name: impl Into<String>) -> Self {
        Self {
            location,
            name: name.into(),
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.location.x
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PlaceRecord {
    lat: f64,
    lon: f64,
    name: String,
}

#[cfg(feature = "serde")]
impl From<PlaceRecord> for Place {
    fn from(record: PlaceRecord) -> Self {
        Self::new(
            Coord {
                x: record.lon,
                y: record.lat,
            },
            record.name,
        )
    }
}

#[cfg(feature = "serde")]
impl From<Place> for PlaceRecord {
    fn from(place: Place) -> Self {
        Self {
            lat: place.location.y,
            lon: place.location.x,
            name: place.name,
        }
    }
}

/// Errors from [`Geocoder::geocode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The query was blank.
    #[error("location query must not be empty")]
    EmptyQuery,
    /// The service found nothing matching the query.
    #[error("could not geocode location: {query}")]
    NotFound {
        /// The query as submitted.
        query: String,
    },
    /// The request did not complete within the configured timeout.
    #[error("geocoding request to {url} timed out after {timeout_secs} s")]
    Timeout {
        /// Request URL.
        url: String,
        /// Configured timeout in whole seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("geocoding request to {url} failed with HTTP {status}: {message}")]
    HttpError {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail.
        message: String,
    },
    /// The request failed before a response arrived.
    #[error("geocoding request to {url} failed: {message}")]
    NetworkError {
        /// Request URL.
        url: String,
        /// Error detail.
        message: String,
    },
    /// The response body could not be understood.
    #[error("failed to parse geocoding response: {message}")]
    ParseError {
        /// Error detail.
        message: String,
    },
}

/// Resolve a place name to a [`Place`].
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use roadlog_core::{GeocodeError, Geocoder, Place};
///
/// struct Fixed;
///
/// impl Geocoder for Fixed {
///     fn geocode(&self, query: &str) -> Result<Place, GeocodeError> {
///         if query.trim().is_empty() {
///             return Err(GeocodeError::EmptyQuery);
///         }
///         Ok(Place::new(Coord { x: -87.63, y: 41.88 }, query.trim()))
///     }
/// }
///
/// let place = Fixed.geocode(" Chicago, IL ")?;
/// assert_eq!(place.name, "Chicago, IL");
/// assert_eq!(place.lat(), 41.88);
/// # Ok::<(), GeocodeError>(())
/// ```
pub trait Geocoder {
    /// Resolve `query` to its best match.
    ///
    /// Implementations must return `Err(GeocodeError::EmptyQuery)` for a
    /// blank query and `Err(GeocodeError::NotFound)` when nothing matches.
    fn geocode(&self, query: &str) -> Result<Place, GeocodeError>;
}

impl<T: Geocoder + ?Sized> Geocoder for Box<T> {
    fn geocode(&self, query: &str) -> Result<Place, GeocodeError> {
        (**self).geocode(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::TableGeocoder;

    #[rstest]
    fn place_exposes_lat_lon() {
        let place = Place::new(Coord { x: -104.99, y: 39.74 }, "Denver, Colorado, US");
        assert_eq!(place.lat(), 39.74);
        assert_eq!(place.lon(), -104.99);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn table_geocoder_rejects_blank_queries(#[case] query: &str) {
        let err = TableGeocoder::default()
            .geocode(query)
            .expect_err("blank query should fail");
        assert_eq!(err, GeocodeError::EmptyQuery);
    }

    #[rstest]
    fn table_geocoder_reports_unknown_places() {
        let err = TableGeocoder::default()
            .geocode("Atlantis")
            .expect_err("unknown place should fail");
        assert_eq!(
            err,
            GeocodeError::NotFound {
                query: "Atlantis".to_owned()
            }
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn place_serializes_flat() {
        let place = Place::new(Coord { x: -90.2, y: 38.63 }, "St. Louis, Missouri, US");
        let json = serde_json::to_value(&place).expect("serialize place");
        assert_eq!(
            json,
            serde_json::json!({ "lat": 38.63, "lon": -90.2, "name": "St. Louis, Missouri, US" })
        );
        let back: Place = serde_json::from_value(json).expect("deserialize place");
        assert_eq!(back, place);
    }

    #[rstest]
    fn not_found_message_names_the_query() {
        let err = GeocodeError::NotFound {
            query: "Nowhere".to_owned(),
        };
        assert_eq!(err.to_string(), "could not geocode location: Nowhere");
    }
}
