//! Inbound trip-planning request.

use crate::HosRules;

use super::error::{LocationField, PlanError};

/// Driver name used on the log sheet when the request omits one.
pub const DEFAULT_DRIVER_NAME: &str = "Driver";
/// Carrier name used on the log sheet when the request omits one.
pub const DEFAULT_CARRIER_NAME: &str = "Motor Carrier";

/// A request to plan a loaded trip.
///
/// # Examples
/// ```
/// use roadlog_core::TripRequest;
///
/// let request = TripRequest::new(" Chicago, IL ", "St. Louis, MO", "Dallas, TX")
///     .with_cycle_hours_used(14.0);
/// let request = request.validate()?;
/// assert_eq!(request.current_location, "Chicago, IL");
/// assert_eq!(request.driver_name(), "Driver");
/// # Ok::<(), roadlog_core::PlanError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRequest {
    /// Where the driver is now.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_location: String,
    /// Where the load is picked up.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pickup_location: String,
    /// Where the load is delivered.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dropoff_location: String,
    /// On-duty hours already used in the current cycle.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cycle_hours_used: f64,
    /// Name printed on the log sheet.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub driver_name: Option<String>,
    /// Carrier printed on the log sheet.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub carrier_name: Option<String>,
}

impl TripRequest {
    /// Request for the three places with no cycle hours used.
    #[must_use]
    pub fn new(
        current_location: impl Into<String>,
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
    ) -> Self {
        Self {
            current_location: current_location.into(),
            pickup_location: pickup_location.into(),
            dropoff_location: dropoff_location.into(),
            ..Self::default()
        }
    }

    /// Set the cycle hours already used.
    #[must_use]
    pub const fn with_cycle_hours_used(mut self, hours: f64) -> Self {
        self.cycle_hours_used = hours;
        self
    }

    /// Set the driver name.
    #[must_use]
    pub fn with_driver_name(mut self, name: impl Into<String>) -> Self {
        self.driver_name = Some(name.into());
        self
    }

    /// Set the carrier name.
    #[must_use]
    pub fn with_carrier_name(mut self, name: impl Into<String>) -> Self {
        self.carrier_name = Some(name.into());
        self
    }

    /// Driver name, or [`DEFAULT_DRIVER_NAME`] when absent.
    #[must_use]
    pub fn driver_name(&self) -> &str {
        self.driver_name.as_deref().unwrap_or(DEFAULT_DRIVER_NAME)
    }

    /// Carrier name, or [`DEFAULT_CARRIER_NAME`] when absent.
    #[must_use]
    pub fn carrier_name(&self) -> &str {
        self.carrier_name.as_deref().unwrap_or(DEFAULT_CARRIER_NAME)
    }

    /// Return a copy with every text field trimmed, after checking that all
    /// three locations are present and the cycle hours are in range.
    ///
    /// # Errors
    ///
    /// [`PlanError::MissingLocation`] for the first blank location, then
    /// [`PlanError::InvalidCycleHours`] when the hours fall outside
    /// `[0, 70]`.
    pub fn validate(&self) -> Result<Self, PlanError> {
        let current_location = required(LocationField::Current, &self.current_location)?;
        let pickup_location = required(LocationField::Pickup, &self.pickup_location)?;
        let dropoff_location = required(LocationField::Dropoff, &self.dropoff_location)?;
        let max = HosRules::default().max_cycle_hours;
        if !(0.0..=max).contains(&self.cycle_hours_used) {
            return Err(PlanError::InvalidCycleHours {
                value: self.cycle_hours_used,
                max,
            });
        }
        Ok(Self {
            current_location,
            pickup_location,
            dropoff_location,
            cycle_hours_used: self.cycle_hours_used,
            driver_name: self.driver_name.as_deref().map(|name| name.trim().to_owned()),
            carrier_name: self.carrier_name.as_deref().map(|name| name.trim().to_owned()),
        })
    }
}

fn required(field: LocationField, value: &str) -> Result<String, PlanError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlanError::MissingLocation { field });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn sample() -> TripRequest {
        TripRequest::new("Chicago, IL", "St. Louis, MO", "Dallas, TX")
    }

    #[fixture]
    fn request() -> TripRequest {
        sample()
    }

    #[rstest]
    #[case(TripRequest { current_location: "  ".into(), ..sample() }, LocationField::Current)]
    #[case(TripRequest { pickup_location: String::new(), ..sample() }, LocationField::Pickup)]
    #[case(TripRequest { dropoff_location: "\t".into(), ..sample() }, LocationField::Dropoff)]
    fn blank_locations_are_rejected(#[case] request: TripRequest, #[case] field: LocationField) {
        assert_eq!(
            request.validate(),
            Err(PlanError::MissingLocation { field })
        );
    }

    #[rstest]
    #[case(-1.0)]
    #[case(70.1)]
    #[case(f64::NAN)]
    fn out_of_range_cycle_hours_are_rejected(request: TripRequest, #[case] hours: f64) {
        let err = request
            .with_cycle_hours_used(hours)
            .validate()
            .expect_err("cycle hours out of range");
        assert!(matches!(err, PlanError::InvalidCycleHours { max, .. } if max == 70.0));
    }

    #[rstest]
    fn validation_trims_text(request: TripRequest) {
        let request = TripRequest {
            dropoff_location: " Dallas, TX\n".into(),
            ..request.with_driver_name("  Jo Doe ")
        };
        let valid = request.validate().expect("valid request");
        assert_eq!(valid.dropoff_location, "Dallas, TX");
        assert_eq!(valid.driver_name(), "Jo Doe");
        assert_eq!(valid.carrier_name(), DEFAULT_CARRIER_NAME);
    }

    #[rstest]
    fn missing_location_message_names_the_field() {
        let err = PlanError::MissingLocation {
            field: LocationField::Pickup,
        };
        assert_eq!(err.to_string(), "pickup_location is required");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserializes_with_defaults() {
        let request: TripRequest = serde_json::from_str(
            r#"{ "current_location": "Chicago, IL", "pickup_location": "St. Louis, MO",
                 "dropoff_location": "Dallas, TX" }"#,
        )
        .expect("request should parse");
        assert_eq!(request.cycle_hours_used, 0.0);
        assert_eq!(request.driver_name, None);
        assert_eq!(request.driver_name(), DEFAULT_DRIVER_NAME);
    }
}
