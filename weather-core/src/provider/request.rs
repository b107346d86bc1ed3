use crate::{config::Units, error::FinderError, model::Coordinate};

/// Provider endpoint, relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Weather,
    Forecast,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Weather => "weather",
            Endpoint::Forecast => "forecast",
        }
    }
}

/// How a location is identified in a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    CityName(String),
    CityId(i64),
    Coordinate { lat: f64, lon: f64 },
}

impl Query {
    /// Rejects coordinates that are incomplete or out of range before any
    /// request is sent.
    pub fn from_coordinate(coordinate: &Coordinate) -> Result<Self, FinderError> {
        use crate::model::Validatable;

        match (coordinate.lat(), coordinate.lon()) {
            (Some(lat), Some(lon)) if coordinate.is_valid() => Ok(Query::Coordinate { lat, lon }),
            (lat, lon) => Err(FinderError::InvalidCoordinate { lat, lon }),
        }
    }

    /// Query-string pairs for this location plus credentials and units.
    pub fn params(&self, api_key: &str, units: Units) -> Vec<(&'static str, String)> {
        let mut params = match self {
            Query::CityName(name) => vec![("q", name.clone())],
            Query::CityId(id) => vec![("id", id.to_string())],
            Query::Coordinate { lat, lon } => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
        };

        params.push(("appid", api_key.to_string()));
        if let Some(units) = units.as_param() {
            params.push(("units", units.to_string()));
        }
        params
    }
}
