use serde::{Deserialize, Serialize};

use super::Validatable;
use crate::decode::lenient_number;

/// A geographic position. Either component may be missing on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(default, deserialize_with = "lenient_number")]
    lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    lon: Option<f64>,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat: Some(lat),
            lon: Some(lon),
        }
    }

    pub fn lat(&self) -> Option<f64> {
        self.lat
    }

    pub fn lon(&self) -> Option<f64> {
        self.lon
    }
}

impl Validatable for Coordinate {
    fn is_valid(&self) -> bool {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => {
                (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_bounds_inclusive() {
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(Coordinate::new(51.5, -0.13).is_valid());
    }

    #[test]
    fn rejects_out_of_range_and_non_finite() {
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.1).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn missing_component_is_invalid() {
        let coord: Coordinate = serde_json::from_value(json!({"lat": 10.0})).unwrap();
        assert_eq!(coord.lat(), Some(10.0));
        assert_eq!(coord.lon(), None);
        assert!(!coord.is_valid());
        assert!(!Coordinate::default().is_valid());
    }

    #[test]
    fn decodes_integer_components() {
        let coord: Coordinate =
            serde_json::from_value(json!({"lat": 0, "lon": 7, "extra": "x"})).unwrap();
        assert_eq!(coord, Coordinate::new(0.0, 7.0));
    }

    #[test]
    fn decodes_numeric_strings() {
        let coord: Coordinate =
            serde_json::from_value(json!({"lat": "51.5", "lon": "-0.13"})).unwrap();
        assert_eq!(coord, Coordinate::new(51.5, -0.13));

        assert!(serde_json::from_value::<Coordinate>(json!({"lat": "north"})).is_err());
    }
}
