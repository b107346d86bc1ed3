use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{City, Validatable, Weather};
use crate::decode::null_as_default;
use crate::error::DecodeError;

/// A city together with its forecast entries, in provider order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ForecastBuilder")]
pub struct Forecast {
    city: Option<City>,
    #[serde(rename = "list")]
    weathers: Vec<Weather>,
}

impl Forecast {
    pub fn builder() -> ForecastBuilder {
        ForecastBuilder::default()
    }

    pub fn from_json(value: Value) -> Result<Self, DecodeError> {
        if !value.is_object() {
            return Err(DecodeError::NotAnObject("forecast"));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn city(&self) -> Option<&City> {
        self.city.as_ref()
    }

    /// Returns a fresh copy of the entries on every call; never `None`,
    /// possibly empty.
    pub fn weathers(&self) -> Vec<Weather> {
        self.weathers.clone()
    }

    pub fn len(&self) -> usize {
        self.weathers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weathers.is_empty()
    }
}

impl Validatable for Forecast {
    /// An empty entry list does not invalidate the forecast.
    fn is_valid(&self) -> bool {
        self.city.is_valid() && self.weathers.iter().all(Validatable::is_valid)
    }
}

/// Accumulates the parts of a [`Forecast`]. Doubles as its wire shape:
/// entries arrive under `list`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForecastBuilder {
    city: Option<City>,
    #[serde(rename = "list", deserialize_with = "null_as_default")]
    weathers: Vec<Weather>,
}

impl ForecastBuilder {
    pub fn city(mut self, city: City) -> Self {
        self.city = Some(city);
        self
    }

    pub fn weathers(mut self, weathers: Vec<Weather>) -> Self {
        self.weathers = weathers;
        self
    }

    pub fn build(self) -> Forecast {
        Forecast {
            city: self.city,
            weathers: self.weathers,
        }
    }
}

impl From<ForecastBuilder> for Forecast {
    fn from(builder: ForecastBuilder) -> Self {
        builder.build()
    }
}
