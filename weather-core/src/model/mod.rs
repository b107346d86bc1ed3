//! Immutable domain entities decoded from provider responses.

pub mod city;
pub mod coordinate;
pub mod forecast;
pub mod main_attribute;
pub mod weather;

pub use city::City;
pub use coordinate::Coordinate;
pub use forecast::{Forecast, ForecastBuilder};
pub use main_attribute::MainAttribute;
pub use weather::{Weather, WeatherBuilder};

/// Reserved city id meaning "not set".
pub const NO_CITY_ID: i64 = -1;

/// Business-rule check over an entity's current field values.
pub trait Validatable {
    fn is_valid(&self) -> bool;
}

impl<T: Validatable> Validatable for Option<T> {
    fn is_valid(&self) -> bool {
        self.as_ref().is_some_and(Validatable::is_valid)
    }
}
