use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::{
    config::{DEFAULT_BASE_URL, Units},
    decode::{parse_forecast, parse_weather},
    error::FinderError,
    model::{Coordinate, Forecast, Validatable, Weather},
};

use super::{
    WeatherFinder,
    request::{Endpoint, Query},
};

/// OpenWeatherMap client for the 2.5 `weather` and `forecast` endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    units: Units,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            units: Units::default(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }

    async fn fetch(&self, endpoint: Endpoint, query: &Query) -> Result<String, FinderError> {
        let url = self.url(endpoint);
        tracing::debug!(%url, ?query, "Requesting OpenWeather data");

        let res = self.http.get(&url).query(&query.params(&self.api_key, self.units)).send().await?;

        let status = res.status();
        let body = res.text().await?;
        tracing::debug!(%status, bytes = body.len(), "OpenWeather responded");

        check_status(status, body)
    }

    async fn fetch_weather(&self, query: Query) -> Result<Weather, FinderError> {
        let body = self.fetch(Endpoint::Weather, &query).await?;
        let weather = parse_weather(&body)?;

        if !weather.is_valid() {
            tracing::info!(?query, city_id = weather.city_id(), "Decoded weather is incomplete");
        }
        Ok(weather)
    }

    async fn fetch_forecast(&self, query: Query) -> Result<Forecast, FinderError> {
        let body = self.fetch(Endpoint::Forecast, &query).await?;
        let forecast = parse_forecast(&body)?;

        tracing::debug!(entries = forecast.len(), valid = forecast.is_valid(), "Decoded forecast");
        Ok(forecast)
    }
}

#[async_trait]
impl WeatherFinder for OpenWeatherClient {
    async fn find_weather_by_city_name(&self, name: &str) -> Result<Weather, FinderError> {
        self.fetch_weather(Query::CityName(name.to_string())).await
    }

    async fn find_weather_by_city_id(&self, id: i64) -> Result<Weather, FinderError> {
        self.fetch_weather(Query::CityId(id)).await
    }

    async fn find_weather_by_coordinate(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Weather, FinderError> {
        self.fetch_weather(Query::from_coordinate(coordinate)?).await
    }

    async fn find_forecast_by_city_name(&self, name: &str) -> Result<Forecast, FinderError> {
        self.fetch_forecast(Query::CityName(name.to_string())).await
    }

    async fn find_forecast_by_coordinate(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Forecast, FinderError> {
        self.fetch_forecast(Query::from_coordinate(coordinate)?).await
    }
}

fn check_status(status: StatusCode, body: String) -> Result<String, FinderError> {
    if status.is_success() {
        Ok(body)
    } else {
        Err(FinderError::Status { status: status.as_u16(), body: truncate_body(&body) })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
