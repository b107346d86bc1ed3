//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Immutable domain entities (`Weather`, `Forecast` and their parts) with validity checks
//! - Decoding of OpenWeather JSON into those entities
//! - Configuration & credentials handling
//! - The finder abstraction and its OpenWeather client
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod decode;
pub mod error;
pub mod model;
pub mod provider;

pub use config::{Config, Units};
pub use decode::{parse_forecast, parse_weather};
pub use error::{DecodeError, FinderError};
pub use model::{
    City, Coordinate, Forecast, ForecastBuilder, MainAttribute, NO_CITY_ID, Validatable, Weather,
    WeatherBuilder,
};
pub use provider::{WeatherFinder, finder_from_config, openweather::OpenWeatherClient};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_shareable<T: Send + Sync + Clone>() {}

    #[test]
    fn entities_are_shareable() {
        assert_shareable::<Weather>();
        assert_shareable::<Forecast>();
        assert_shareable::<City>();
    }

    #[test]
    fn decodes_provider_forecast_sample() {
        // Forecast entries carry no city id, name, coordinate or sun times.
        let body = r#"{
            "cod": "200",
            "message": 0,
            "cnt": 2,
            "list": [{
                "dt": 1609462800,
                "main": {"temp": 279.1, "feels_like": 275.2, "temp_min": 278.9,
                         "temp_max": 279.1, "pressure": 1013, "sea_level": 1013,
                         "grnd_level": 1009, "humidity": 87, "temp_kf": 0.2},
                "weather": [{"id": 804, "main": "Clouds", "description": "overcast clouds",
                             "icon": "04n"}],
                "clouds": {"all": 100},
                "wind": {"speed": 4.1, "deg": 240},
                "visibility": 10000,
                "pop": 0,
                "sys": {"pod": "n"},
                "dt_txt": "2021-01-01 01:00:00"
            }, {
                "dt": 1609473600,
                "main": {"temp": 280.2, "temp_min": 280.2, "temp_max": 280.2,
                         "pressure": 1014, "humidity": 80},
                "sys": {"pod": "d"},
                "dt_txt": "2021-01-01 04:00:00"
            }],
            "city": {"id": 2643743, "name": "London",
                     "coord": {"lat": 51.5085, "lon": -0.1257},
                     "country": "GB", "population": 1000000, "timezone": 0,
                     "sunrise": 1609488287, "sunset": 1609516847}
        }"#;

        let forecast = parse_forecast(body).unwrap();
        assert_eq!(forecast.len(), 2);
        assert_eq!(forecast.city().map(City::name), Some("London"));
        assert!(forecast.city().is_some_and(Validatable::is_valid));

        let entries = forecast.weathers();
        assert!(entries.iter().all(|w| w.attribute().is_some_and(Validatable::is_valid)));
        assert!(entries.iter().all(|w| !w.is_valid()));
        assert_eq!(entries[0].city_id(), NO_CITY_ID);
        assert!(!forecast.is_valid());
    }
}
