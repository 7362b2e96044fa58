//! HTTP adapters for the roadlog collaborators.
//!
//! Responsibilities:
//! - Implement [`roadlog_core::RouteProvider`] against OSRM.
//! - Implement [`roadlog_core::Geocoder`] against Nominatim.
//! - Map transport failures onto the core error taxonomies.
//!
//! Boundaries:
//! - Do not encode HOS rules (live in `roadlog-core`).
//! - Keep the core traits synchronous; block on an owned runtime here.
//!
//! Invariants:
//! - No global mutable state.
//! - Adapters are reusable across calls and never retry on their own.

mod http;

pub mod geocoding;
pub mod routing;

pub use http::ClientBuildError;

/// Default user agent sent to both services.
pub const DEFAULT_USER_AGENT: &str = concat!("roadlog/", env!("CARGO_PKG_VERSION"));
