//! Location value types.

use serde::{Deserialize, Serialize};

/// A place a bus route can start or end at.
///
/// Carries both an English and a Bengali display name plus coordinates.
/// Equality is by content. An "empty" location (no English name) stands
/// for an unset slot in the fare form.
///
/// # Examples
///
/// ```
/// use fare_client::domain::Location;
///
/// let unset = Location::default();
/// assert!(!unset.is_selected());
///
/// let dhaka = Location::new("Dhaka", "ঢাকা", 23.8103, 90.4125);
/// assert!(dhaka.is_selected());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name_en: String,
    pub name_bn: String,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    /// Create a location from its names and coordinates.
    pub fn new(
        name_en: impl Into<String>,
        name_bn: impl Into<String>,
        lat: f64,
        lon: f64,
    ) -> Self {
        Self {
            name_en: name_en.into(),
            name_bn: name_bn.into(),
            lat,
            lon,
        }
    }

    /// Whether this slot holds a real selection.
    ///
    /// A location counts as selected when its English name is non-empty.
    pub fn is_selected(&self) -> bool {
        !self.name_en.is_empty()
    }
}

/// Response body of `GET /locations/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub locations: Vec<Location>,
    pub total: usize,
    pub query: String,
}

/// Response body of `GET /locations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<Location>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_selected() {
        let location = Location::default();
        assert!(!location.is_selected());
        assert_eq!(location.name_en, "");
        assert_eq!(location.name_bn, "");
        assert_eq!(location.lat, 0.0);
        assert_eq!(location.lon, 0.0);
    }

    #[test]
    fn named_location_is_selected() {
        let location = Location::new("Mirpur", "মিরপুর", 23.8223, 90.3654);
        assert!(location.is_selected());
    }

    #[test]
    fn equality_is_by_content() {
        let a = Location::new("Dhaka", "ঢাকা", 23.8103, 90.4125);
        let b = Location::new("Dhaka", "ঢাকা", 23.8103, 90.4125);
        let c = Location::new("Dhaka", "ঢাকা", 23.81, 90.41);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn serde_uses_camel_case_names() {
        let location = Location::new("Dhaka", "ঢাকা", 23.8103, 90.4125);
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["nameEn"], "Dhaka");
        assert_eq!(json["nameBn"], "ঢাকা");
        assert_eq!(json["lat"], 23.8103);
        assert_eq!(json["lon"], 90.4125);
    }

    #[test]
    fn search_response_deserializes() {
        let body = r#"{
            "locations": [
                { "nameEn": "Dhaka", "nameBn": "ঢাকা", "lat": 23.8103, "lon": 90.4125 }
            ],
            "total": 1,
            "query": "Dhaka"
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total, 1);
        assert_eq!(response.query, "Dhaka");
        assert_eq!(response.locations[0].name_en, "Dhaka");
    }
}
