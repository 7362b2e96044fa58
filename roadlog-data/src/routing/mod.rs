//! HTTP route provider backed by OSRM.
//!
//! [`HttpRouteProvider`] implements [`roadlog_core::RouteProvider`] against
//! the OSRM Route service (`/route/v1/{profile}/...`), as served by
//! `router.project-osrm.org` or a self-hosted instance.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use geo::Coord;
//! use roadlog_core::RouteProvider;
//! use roadlog_data::routing::{HttpRouteProvider, HttpRouteProviderConfig};
//!
//! let config = HttpRouteProviderConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(30))
//!     .with_user_agent("my-app/1.0");
//! let provider = HttpRouteProvider::with_config(config)?;
//!
//! let route = provider.route(&[
//!     Coord { x: -87.6298, y: 41.8781 },
//!     Coord { x: -90.1994, y: 38.6270 },
//! ])?;
//! println!("{:.1} mi", route.distance_miles());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod osrm;
mod provider;

#[doc(hidden)]
pub mod test_support;

pub use provider::{DEFAULT_OSRM_BASE_URL, HttpRouteProvider, HttpRouteProviderConfig};
