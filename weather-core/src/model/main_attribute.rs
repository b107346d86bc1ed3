use serde::{Deserialize, Serialize};

use super::Validatable;
use crate::decode::lenient_number;

/// Current-conditions measurement block (`main` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MainAttribute {
    #[serde(rename = "temp", default, deserialize_with = "lenient_number")]
    temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pressure: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    humidity: Option<f64>,
    #[serde(rename = "temp_min", default, deserialize_with = "lenient_number")]
    temperature_min: Option<f64>,
    #[serde(rename = "temp_max", default, deserialize_with = "lenient_number")]
    temperature_max: Option<f64>,
}

impl MainAttribute {
    pub fn new(
        temperature: f64,
        pressure: f64,
        humidity: f64,
        temperature_min: f64,
        temperature_max: f64,
    ) -> Self {
        Self {
            temperature: Some(temperature),
            pressure: Some(pressure),
            humidity: Some(humidity),
            temperature_min: Some(temperature_min),
            temperature_max: Some(temperature_max),
        }
    }

    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    pub fn pressure(&self) -> Option<f64> {
        self.pressure
    }

    pub fn humidity(&self) -> Option<f64> {
        self.humidity
    }

    pub fn temperature_min(&self) -> Option<f64> {
        self.temperature_min
    }

    pub fn temperature_max(&self) -> Option<f64> {
        self.temperature_max
    }
}

impl Validatable for MainAttribute {
    fn is_valid(&self) -> bool {
        let finite = |v: Option<f64>| v.is_some_and(f64::is_finite);

        finite(self.temperature)
            && finite(self.pressure)
            && finite(self.temperature_min)
            && finite(self.temperature_max)
            && self.humidity.is_some_and(|h| (0.0..=100.0).contains(&h))
    }
}
