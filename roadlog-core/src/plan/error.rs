use std::fmt;

use thiserror::Error;

use crate::{GeocodeError, RoutingError, ScheduleError};

/// The request field a location came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationField {
    /// The driver's current position.
    Current,
    /// The shipper.
    Pickup,
    /// The consignee.
    Dropoff,
}

impl LocationField {
    /// Field name as it appears in a request body.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current_location",
            Self::Pickup => "pickup_location",
            Self::Dropoff => "dropoff_location",
        }
    }
}

impl fmt::Display for LocationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from [`crate::TripPlanner::plan`] and [`crate::TripRequest::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A location field was missing or blank.
    #[error("{field} is required")]
    MissingLocation {
        /// The blank field.
        field: LocationField,
    },
    /// Starting cycle hours were outside `[0, max]`.
    #[error("cycle_hours_used must be between 0 and {max} (got {value})")]
    InvalidCycleHours {
        /// Hours supplied.
        value: f64,
        /// Cycle cap.
        max: f64,
    },
    /// A location could not be geocoded.
    #[error("failed to geocode {field}: {source}")]
    Geocode {
        /// The field whose value failed.
        field: LocationField,
        /// Underlying geocoder error.
        #[source]
        source: GeocodeError,
    },
    /// The route through the three places could not be computed.
    #[error("routing failed: {0}")]
    Routing(#[from] RoutingError),
    /// The simulator rejected the routed trip.
    #[error("scheduling failed: {0}")]
    Schedule(#[from] ScheduleError),
}
