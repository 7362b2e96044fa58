//! HTTP geocoder backed by Nominatim.
//!
//! [`NominatimGeocoder`] implements [`roadlog_core::Geocoder`] against the
//! Nominatim search API, as served by `nominatim.openstreetmap.org` or a
//! self-hosted instance. The public instance asks for an identifying user
//! agent and at most one request per second.

mod geocoder;
mod nominatim;

#[doc(hidden)]
pub mod test_support;

pub use geocoder::{DEFAULT_NOMINATIM_BASE_URL, NominatimConfig, NominatimGeocoder};
