use serde::{Deserialize, Serialize};
use std::fmt;

/// What to look up: a free-form address, or a coordinate pair to reverse
/// geocode.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeRequest {
    Address(String),
    Coordinates { lat: f64, lng: f64 },
}

impl GeocodeRequest {
    pub fn address(address: impl Into<String>) -> Self {
        GeocodeRequest::Address(address.into())
    }

    /// The query parameter this request is sent as.
    pub fn query_pair(&self) -> (&'static str, String) {
        match self {
            GeocodeRequest::Address(address) => ("address", address.clone()),
            GeocodeRequest::Coordinates { lat, lng } => ("latlng", format!("{lat},{lng}")),
        }
    }
}

impl fmt::Display for GeocodeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeRequest::Address(address) => write!(f, "address '{address}'"),
            GeocodeRequest::Coordinates { lat, lng } => write!(f, "coordinates {lat},{lng}"),
        }
    }
}

// {
//   "lat": 40.710785,   (optional)
//   "lng": -74.005157   (optional)
// }
//
// Anything else in the body is ignored.

/// Result of a geocoding call. Both fields are absent when the service
/// resolved nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }

    /// `"LON,LAT"`, the order the static map expects. `None` unless both
    /// coordinates are known.
    pub fn lonlat(&self) -> Option<String> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(format!("{lng},{lat}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_both_fields() {
        let location: Location = serde_json::from_str(r#"{"lat":40.7,"lng":-74.0}"#).unwrap();
        assert_eq!(location, Location::new(40.7, -74.0));
        assert!(location.is_resolved());
    }

    #[test]
    fn empty_object_is_unknown_location() {
        let location: Location = serde_json::from_str("{}").unwrap();
        assert_eq!(location, Location::default());
        assert!(!location.is_resolved());
        assert_eq!(location.lonlat(), None);
    }

    #[test]
    fn nulls_and_unknown_fields() {
        let location: Location =
            serde_json::from_str(r#"{"lat":null,"lng":2.35,"formatted":"Paris"}"#).unwrap();
        assert_eq!(location.lat, None);
        assert_eq!(location.lng, Some(2.35));
        assert!(!location.is_resolved());
    }

    #[test]
    fn lonlat_swaps_order() {
        assert_eq!(
            Location::new(40.710785, -74.005157).lonlat().as_deref(),
            Some("-74.005157,40.710785")
        );
    }

    #[test]
    fn request_query_pairs() {
        assert_eq!(
            GeocodeRequest::address("1 Main St").query_pair(),
            ("address", "1 Main St".to_string())
        );
        assert_eq!(
            GeocodeRequest::Coordinates { lat: 40.5, lng: -74.25 }.query_pair(),
            ("latlng", "40.5,-74.25".to_string())
        );
    }
}
