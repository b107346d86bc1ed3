//! Plain-text rendering of decoded entities.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use weather_core::{Forecast, Units, Validatable, Weather};

fn time(at: Option<DateTime<Utc>>) -> String {
    at.map(|t| t.format("%H:%M UTC").to_string()).unwrap_or_else(|| "-".to_string())
}

fn value(v: Option<f64>, suffix: &str) -> String {
    v.map(|v| format!("{v:.1}{suffix}")).unwrap_or_else(|| "-".to_string())
}

pub fn weather(weather: &Weather, units: Units) -> String {
    let mut out = String::new();
    let deg = units.temperature_suffix();

    let _ = writeln!(
        out,
        "{}, {} (id {})",
        weather.city_name(),
        weather.country_code(),
        weather.city_id()
    );

    if let Some(main) = weather.attribute() {
        let _ = writeln!(
            out,
            "  Temperature: {} (min {}, max {})",
            value(main.temperature(), deg),
            value(main.temperature_min(), deg),
            value(main.temperature_max(), deg),
        );
        let _ = writeln!(out, "  Humidity:    {}", value(main.humidity(), "%"));
        let _ = writeln!(out, "  Pressure:    {}", value(main.pressure(), " hPa"));
    }

    let _ = writeln!(out, "  Sunrise:     {}", time(weather.sunrise_at()));
    let _ = writeln!(out, "  Sunset:      {}", time(weather.sunset_at()));
    out
}

/// Entries are numbered in provider order. Entries without a usable
/// measurement block are left out and counted at the end.
pub fn forecast(forecast: &Forecast, units: Units) -> String {
    let mut out = String::new();
    let deg = units.temperature_suffix();

    if let Some(city) = forecast.city() {
        let _ = writeln!(
            out,
            "Forecast for {}, {} (id {})",
            city.name(),
            city.country_code(),
            city.id()
        );
    }

    if forecast.is_empty() {
        let _ = writeln!(out, "  no entries");
        return out;
    }

    let mut skipped = 0;
    for (i, entry) in forecast.weathers().iter().enumerate() {
        let Some(main) = entry.attribute().filter(|m| m.is_valid()) else {
            skipped += 1;
            continue;
        };
        let _ = writeln!(
            out,
            "  #{:<3} {}  {}",
            i + 1,
            value(main.temperature(), deg),
            value(main.humidity(), "%"),
        );
    }

    if skipped > 0 {
        let _ = writeln!(out, "  ({skipped} entries without measurements skipped)");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::{City, Coordinate, MainAttribute};

    fn sample() -> Weather {
        Weather::builder()
            .city_id(2643743)
            .city_name("London")
            .country_code("GB")
            .sunrise_time(1609459200)
            .sunset_time(1609488000)
            .coordinate(Coordinate::new(51.5, -0.13))
            .attribute(MainAttribute::new(7.35, 1012.0, 81.0, 4.85, 8.85))
            .build()
    }

    #[test]
    fn renders_current_weather() {
        let text = weather(&sample(), Units::Metric);

        assert!(text.starts_with("London, GB (id 2643743)"));
        assert!(text.contains("Temperature: 7.3°C") || text.contains("Temperature: 7.4°C"));
        assert!(text.contains("Humidity:    81.0%"));
        assert!(text.contains("Sunrise:     00:00 UTC"));
        assert!(text.contains("Sunset:      08:00 UTC"));
    }

    #[test]
    fn renders_forecast_entries_and_empty_list() {
        let city = City::new(2643743, "London", "GB", Coordinate::new(51.5, -0.13));

        let full = Forecast::builder()
            .city(city.clone())
            .weathers(vec![sample(), sample()])
            .build();
        let text = forecast(&full, Units::Imperial);
        assert!(text.contains("Forecast for London, GB"));
        assert!(text.contains("#1"));
        assert!(text.contains("#2"));
        assert!(text.contains("°F"));

        let empty = Forecast::builder().city(city).build();
        assert!(forecast(&empty, Units::Standard).contains("no entries"));
    }

    #[test]
    fn renders_provider_entries_and_skips_missing_measurements() {
        let city = City::new(2643743, "London", "GB", Coordinate::new(51.5, -0.13));
        let provider_entry = Weather::builder()
            .attribute(MainAttribute::new(6.0, 1013.0, 87.0, 5.5, 6.0))
            .build();
        let no_main = Weather::builder().build();

        let mixed = Forecast::builder()
            .city(city)
            .weathers(vec![provider_entry.clone(), no_main, provider_entry])
            .build();
        assert!(!mixed.is_valid());

        let text = forecast(&mixed, Units::Metric);
        assert!(text.contains("#1"));
        assert!(!text.contains("#2"));
        assert!(text.contains("#3"));
        assert!(text.contains("6.0°C"));
        assert!(text.contains("(1 entries without measurements skipped)"));
    }
}
