use crate::{
    Config,
    error::FinderError,
    model::{Coordinate, Forecast, Weather},
    provider::openweather::OpenWeatherClient,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;
pub mod request;

/// Lookups that resolve to one decoded entity each.
///
/// Every call yields exactly one result. Dropping the returned future
/// abandons the request; decoding has no side effects to undo.
#[async_trait]
pub trait WeatherFinder: Send + Sync + Debug {
    async fn find_weather_by_city_name(&self, name: &str) -> Result<Weather, FinderError>;

    async fn find_weather_by_city_id(&self, id: i64) -> Result<Weather, FinderError>;

    async fn find_weather_by_coordinate(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Weather, FinderError>;

    async fn find_forecast_by_city_name(&self, name: &str) -> Result<Forecast, FinderError>;

    async fn find_forecast_by_coordinate(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Forecast, FinderError>;
}

/// Construct the OpenWeather finder from config.
pub fn finder_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherFinder>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
                 Hint: run `weather configure` or set OPENWEATHER_API_KEY."
        )
    })?;

    let client = OpenWeatherClient::new(api_key.to_owned())
        .with_base_url(config.base_url())
        .with_units(config.units);

    Ok(Box::new(client))
}
