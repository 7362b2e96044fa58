//! The planning pipeline and its result.

use log::{debug, info};

use crate::rounding::round_to;
use crate::{Geocoder, Place, RouteProvider, Simulator, TripSchedule};

use super::error::{LocationField, PlanError};
use super::request::TripRequest;

/// The three resolved stops of a trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanLocations {
    /// The driver's starting position.
    pub start: Place,
    /// The shipper.
    pub pickup: Place,
    /// The consignee.
    pub dropoff: Place,
}

/// The routed path as shown on a map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedRoute {
    /// Polyline as `[lon, lat]` pairs.
    pub geometry: Vec<[f64; 2]>,
    /// Route length in miles, rounded to one decimal.
    pub distance_mi: f64,
    /// Service-estimated driving time in seconds.
    pub duration_s: f64,
}

/// Names printed on the log sheet header.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanMeta {
    /// Driver name.
    pub driver_name: String,
    /// Carrier name.
    pub carrier_name: String,
}

/// A fully planned trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPlan {
    /// Resolved stops.
    pub locations: PlanLocations,
    /// Routed path.
    pub route: PlannedRoute,
    /// HOS schedule for the routed distance.
    pub schedule: TripSchedule,
    /// Log sheet header.
    pub meta: PlanMeta,
}

/// Plans trips with a geocoder, a router and a simulator.
///
/// # Examples
/// ```
/// # #[cfg(feature = "test-support")] {
/// use roadlog_core::test_support::{StraightLineRouter, TableGeocoder};
/// use roadlog_core::{Simulator, TripPlanner, TripRequest};
///
/// let planner = TripPlanner::new(TableGeocoder::midwest(), StraightLineRouter, Simulator::default());
/// let request = TripRequest::new("Chicago, IL", "Indianapolis, IN", "St. Louis, MO");
/// let plan = planner.plan(&request)?;
/// assert_eq!(plan.locations.pickup.name, "Indianapolis, IN");
/// assert!(plan.schedule.is_complete());
/// # }
/// # Ok::<(), roadlog_core::PlanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TripPlanner<G, R> {
    geocoder: G,
    router: R,
    simulator: Simulator,
}

impl<G, R> TripPlanner<G, R>
where
    G: Geocoder,
    R: RouteProvider,
{
    /// Assemble a planner from its collaborators.
    pub const fn new(geocoder: G, router: R, simulator: Simulator) -> Self {
        Self {
            geocoder,
            router,
            simulator,
        }
    }

    /// Geocode, route and schedule `request`.
    ///
    /// Locations are resolved in request order and the first failure is
    /// returned. The route visits start, pickup and dropoff in that order.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError`] when validation, geocoding, routing or
    /// scheduling fails.
    pub fn plan(&self, request: &TripRequest) -> Result<TripPlan, PlanError> {
        let valid = request.validate()?;
        let locations = PlanLocations {
            start: self.locate(LocationField::Current, &valid.current_location)?,
            pickup: self.locate(LocationField::Pickup, &valid.pickup_location)?,
            dropoff: self.locate(LocationField::Dropoff, &valid.dropoff_location)?,
        };

        let route = self.router.route(&[
            locations.start.location,
            locations.pickup.location,
            locations.dropoff.location,
        ])?;
        let total_miles = route.distance_miles();
        info!(
            "routed {} -> {} -> {}: {total_miles:.1} mi",
            locations.start.name, locations.pickup.name, locations.dropoff.name
        );

        let schedule = self
            .simulator
            .simulate(total_miles, valid.cycle_hours_used)?;
        Ok(TripPlan {
            locations,
            route: PlannedRoute {
                geometry: route.geometry.0.iter().map(|coord| [coord.x, coord.y]).collect(),
                distance_mi: round_to(total_miles, 1),
                duration_s: route.duration_seconds,
            },
            schedule,
            meta: PlanMeta {
                driver_name: valid.driver_name().to_owned(),
                carrier_name: valid.carrier_name().to_owned(),
            },
        })
    }

    fn locate(&self, field: LocationField, query: &str) -> Result<Place, PlanError> {
        let place = self
            .geocoder
            .geocode(query)
            .map_err(|source| PlanError::Geocode { field, source })?;
        debug!("{field}: {query:?} resolved to {}", place.name);
        Ok(place)
    }
}
