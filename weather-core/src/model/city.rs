use serde::{Deserialize, Serialize};

use super::{Coordinate, NO_CITY_ID, Validatable};
use crate::decode::{lenient_number, null_as_default};

/// The location a forecast refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct City {
    #[serde(deserialize_with = "null_as_id")]
    id: i64,
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(rename = "country", deserialize_with = "null_as_default")]
    country_code: String,
    #[serde(rename = "coord")]
    coordinate: Option<Coordinate>,
}

impl Default for City {
    fn default() -> Self {
        Self {
            id: NO_CITY_ID,
            name: String::new(),
            country_code: String::new(),
            coordinate: None,
        }
    }
}

fn null_as_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(lenient_number::<D, i64>(deserializer)?.unwrap_or(NO_CITY_ID))
}

impl City {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        country_code: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            country_code: country_code.into(),
            coordinate: Some(coordinate),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn coordinate(&self) -> Option<&Coordinate> {
        self.coordinate.as_ref()
    }
}

impl Validatable for City {
    fn is_valid(&self) -> bool {
        self.id != NO_CITY_ID
            && !self.name.is_empty()
            && !self.country_code.is_empty()
            && self.coordinate.is_valid()
    }
}
