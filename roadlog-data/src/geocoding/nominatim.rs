//! Nominatim search response types.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Search/>

use geo::Coord;
use serde::Deserialize;

/// One entry of the `/search?format=json` array.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    /// Latitude as a decimal string.
    pub lat: String,
    /// Longitude as a decimal string.
    pub lon: String,
    /// Full comma-separated display name.
    pub display_name: String,
    /// Address breakdown, present with `addressdetails=1`.
    #[serde(default)]
    pub address: Address,
}

/// The address fields used to build a short display name.
#[derive(Debug, Default, Deserialize)]
pub struct Address {
    /// City name.
    pub city: Option<String>,
    /// Town name, for places too small to be a city.
    pub town: Option<String>,
    /// Village name.
    pub village: Option<String>,
    /// County name.
    pub county: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// ISO 3166-1 alpha-2 country code, lower case.
    pub country_code: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.is_empty())
}

impl SearchResult {
    /// Parse the string coordinates.
    pub fn coordinate(&self) -> Result<Coord<f64>, String> {
        let lat: f64 = self
            .lat
            .parse()
            .map_err(|err| format!("invalid latitude {:?}: {err}", self.lat))?;
        let lon: f64 = self
            .lon
            .parse()
            .map_err(|err| format!("invalid longitude {:?}: {err}", self.lon))?;
        Ok(Coord { x: lon, y: lat })
    }

    /// Short display name: locality, state and upper-case country code.
    ///
    /// Falls back to the first field of `display_name` when the address
    /// has none of those parts.
    pub fn short_name(&self) -> String {
        let address = &self.address;
        let locality = non_empty(address.city.as_ref())
            .or_else(|| non_empty(address.town.as_ref()))
            .or_else(|| non_empty(address.village.as_ref()))
            .or_else(|| non_empty(address.county.as_ref()));
        let country = address
            .country_code
            .as_deref()
            .map(str::to_uppercase)
            .filter(|code| !code.is_empty());
        let parts: Vec<&str> = [locality, non_empty(address.state.as_ref()), country.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            return self
                .display_name
                .split(',')
                .next()
                .unwrap_or_default()
                .trim()
                .to_owned();
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(json: &str) -> SearchResult {
        let mut results: Vec<SearchResult> = serde_json::from_str(json).expect("should deserialise");
        results.pop().expect("one result")
    }

    #[rstest]
    fn short_name_prefers_city_state_country() {
        let result = parse(
            r#"[{
                "lat": "41.8755616", "lon": "-87.6244212",
                "display_name": "Chicago, Cook County, Illinois, United States",
                "address": { "city": "Chicago", "county": "Cook County",
                             "state": "Illinois", "country_code": "us" }
            }]"#,
        );
        assert_eq!(result.short_name(), "Chicago, Illinois, US");
        let coord = result.coordinate().expect("valid coordinate");
        assert_eq!(coord, Coord { x: -87.624_421_2, y: 41.875_561_6 });
    }

    #[rstest]
    #[case(r#"{ "town": "Effingham", "state": "Illinois" }"#, "Effingham, Illinois")]
    #[case(r#"{ "village": "Tuscola", "country_code": "us" }"#, "Tuscola, US")]
    #[case(r#"{ "county": "Coles County" }"#, "Coles County")]
    fn short_name_falls_through_locality_kinds(#[case] address: &str, #[case] expected: &str) {
        let result = parse(&format!(
            r#"[{{ "lat": "0", "lon": "0", "display_name": "x", "address": {address} }}]"#
        ));
        assert_eq!(result.short_name(), expected);
    }

    #[rstest]
    fn short_name_falls_back_to_display_name() {
        let result = parse(
            r#"[{ "lat": "0", "lon": "0", "display_name": "Null Island, Atlantic Ocean" }]"#,
        );
        assert_eq!(result.short_name(), "Null Island");
    }

    #[rstest]
    fn coordinate_rejects_garbage() {
        let result = parse(r#"[{ "lat": "north", "lon": "0", "display_name": "x" }]"#);
        assert!(result.coordinate().is_err());
    }
}
