use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::{Coordinate, MainAttribute, NO_CITY_ID, Validatable};
use crate::decode::{
    Setter, apply_fields, into_object, nested_i64, scalar_string, typed, typed_number,
};
use crate::error::DecodeError;

const KEY_CITY_ID: &str = "id";
const KEY_CITY_NAME: &str = "name";
const KEY_COUNTRY_CODE: &str = "country";
const KEY_COORDINATE: &str = "coord";
const KEY_MAIN: &str = "main";
const KEY_SUNRISE: &str = "sunrise";
const KEY_SUNSET: &str = "sunset";
const KEY_SYSTEM: &str = "sys";

/// Weather at a single location, as reported by the provider.
///
/// Built only through [`WeatherBuilder`] or by decoding; never mutated
/// afterwards. Use [`Validatable::is_valid`] before trusting the values.
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    city_id: i64,
    city_name: String,
    country_code: String,
    sunrise_time: i64,
    sunset_time: i64,
    coordinate: Option<Coordinate>,
    attribute: Option<MainAttribute>,
}

impl Weather {
    pub fn builder() -> WeatherBuilder {
        WeatherBuilder::new()
    }

    /// Decodes a provider object. Type mismatches fail here; missing
    /// fields keep their defaults and show up through `is_valid`.
    pub fn from_json(value: Value) -> Result<Self, DecodeError> {
        let object = into_object(value, "weather")?;
        WeatherBuilder::from_object(object).map(WeatherBuilder::build)
    }

    pub fn city_id(&self) -> i64 {
        self.city_id
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Sunrise in epoch seconds, 0 when the provider sent none.
    pub fn sunrise_time(&self) -> i64 {
        self.sunrise_time
    }

    pub fn sunset_time(&self) -> i64 {
        self.sunset_time
    }

    pub fn sunrise_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.sunrise_time)
    }

    pub fn sunset_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.sunset_time)
    }

    pub fn coordinate(&self) -> Option<&Coordinate> {
        self.coordinate.as_ref()
    }

    pub fn attribute(&self) -> Option<&MainAttribute> {
        self.attribute.as_ref()
    }
}

fn epoch_to_utc(secs: i64) -> Option<DateTime<Utc>> {
    if secs <= 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0)
}

impl Validatable for Weather {
    fn is_valid(&self) -> bool {
        if self.city_id == NO_CITY_ID {
            return false;
        }

        if self.city_name.is_empty() || self.country_code.is_empty() {
            return false;
        }

        if self.sunrise_time <= 0 || self.sunset_time <= 0 {
            return false;
        }

        self.coordinate.is_valid() && self.attribute.is_valid()
    }
}

impl<'de> Deserialize<'de> for Weather {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Weather::from_json(value).map_err(serde::de::Error::custom)
    }
}

/// Serialized in the provider's shape, so the output decodes back into an
/// equal `Weather`.
#[derive(Serialize)]
struct WireWeather<'a> {
    id: i64,
    name: &'a str,
    sys: WireSystem<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    coord: Option<&'a Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    main: Option<&'a MainAttribute>,
}

#[derive(Serialize)]
struct WireSystem<'a> {
    country: &'a str,
    sunrise: i64,
    sunset: i64,
}

impl Serialize for Weather {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireWeather {
            id: self.city_id,
            name: &self.city_name,
            sys: WireSystem {
                country: &self.country_code,
                sunrise: self.sunrise_time,
                sunset: self.sunset_time,
            },
            coord: self.coordinate.as_ref(),
            main: self.attribute.as_ref(),
        }
        .serialize(serializer)
    }
}

/// Accumulates fields for a [`Weather`].
#[derive(Debug, Clone)]
pub struct WeatherBuilder {
    city_id: i64,
    city_name: String,
    country_code: String,
    sunrise_time: i64,
    sunset_time: i64,
    coordinate: Option<Coordinate>,
    attribute: Option<MainAttribute>,
}

impl Default for WeatherBuilder {
    fn default() -> Self {
        Self {
            city_id: NO_CITY_ID,
            city_name: String::new(),
            country_code: String::new(),
            sunrise_time: 0,
            sunset_time: 0,
            coordinate: None,
            attribute: None,
        }
    }
}

/// Wire keys and their setters. `sys` comes after `country` so the nested
/// country code overrides the top-level one when both are sent.
const FIELDS: &[(&str, Setter<WeatherBuilder>)] = &[
    (KEY_CITY_ID, |b, v| Ok(b.city_id(typed_number(KEY_CITY_ID, v)?))),
    (KEY_CITY_NAME, |b, v| Ok(b.city_name(typed::<String>(KEY_CITY_NAME, v)?))),
    (KEY_COUNTRY_CODE, |b, v| Ok(b.country_code(typed::<String>(KEY_COUNTRY_CODE, v)?))),
    (KEY_COORDINATE, |b, v| Ok(b.coordinate(typed(KEY_COORDINATE, v)?))),
    (KEY_MAIN, |b, v| Ok(b.attribute(typed(KEY_MAIN, v)?))),
    (KEY_SYSTEM, |b, v| b.system(into_object(v, "sys")?)),
];

impl WeatherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_object(object: Map<String, Value>) -> Result<Self, DecodeError> {
        apply_fields(Self::new(), object, FIELDS)
    }

    pub fn city_id(mut self, city_id: i64) -> Self {
        self.city_id = city_id;
        self
    }

    pub fn city_name(mut self, city_name: impl Into<String>) -> Self {
        self.city_name = city_name.into();
        self
    }

    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = code.into();
        self
    }

    pub fn sunrise_time(mut self, secs: i64) -> Self {
        self.sunrise_time = secs;
        self
    }

    pub fn sunset_time(mut self, secs: i64) -> Self {
        self.sunset_time = secs;
        self
    }

    /// Flattens the provider's `sys` block: `country`, `sunrise` and
    /// `sunset`. Absent keys default to `""` and `0`; a present value that
    /// is not an integer fails the whole decode.
    pub fn system(mut self, system: Map<String, Value>) -> Result<Self, DecodeError> {
        self.country_code = system
            .get(KEY_COUNTRY_CODE)
            .filter(|v| !v.is_null())
            .map(scalar_string)
            .unwrap_or_default();
        self.sunrise_time = nested_i64(&system, KEY_SUNRISE, 0)?;
        self.sunset_time = nested_i64(&system, KEY_SUNSET, 0)?;
        Ok(self)
    }

    pub fn coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    pub fn attribute(mut self, attribute: MainAttribute) -> Self {
        self.attribute = Some(attribute);
        self
    }

    pub fn build(self) -> Weather {
        Weather {
            city_id: self.city_id,
            city_name: self.city_name,
            country_code: self.country_code,
            sunrise_time: self.sunrise_time,
            sunset_time: self.sunset_time,
            coordinate: self.coordinate,
            attribute: self.attribute,
        }
    }
}
