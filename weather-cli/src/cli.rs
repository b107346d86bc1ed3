use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select};
use weather_core::{Config, Coordinate, Units, Validatable, finder_from_config};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and preferred units.
    Configure,

    /// Show current weather for a city or coordinate.
    Current {
        #[command(flatten)]
        location: Location,

        /// Look up by OpenWeather city id.
        #[arg(long, conflicts_with_all = ["city", "lat", "lon"])]
        id: Option<i64>,

        /// Print the decoded entity as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the forecast for a city or coordinate.
    Forecast {
        #[command(flatten)]
        location: Location,

        /// Print the decoded entity as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct Location {
    /// City name, optionally with country code, e.g. "London,GB".
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub city: Option<String>,

    /// Latitude in degrees.
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees.
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
}

impl Location {
    fn coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate::new(self.lat?, self.lon?))
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Current { location, id, json } => {
                let config = Config::load()?;
                let finder = finder_from_config(&config)?;

                let weather = match (id, &location.city, location.coordinate()) {
                    (Some(id), _, _) => finder.find_weather_by_city_id(id).await?,
                    (None, Some(city), _) => finder.find_weather_by_city_name(city).await?,
                    (None, None, Some(coord)) => finder.find_weather_by_coordinate(&coord).await?,
                    (None, None, None) => bail!("Specify --city, --id or --lat/--lon"),
                };

                if !weather.is_valid() {
                    bail!("The provider returned incomplete weather data; nothing to show.");
                }

                if json {
                    println!("{}", serde_json::to_string_pretty(&weather)?);
                } else {
                    print!("{}", output::weather(&weather, config.units));
                }
                Ok(())
            }
            Command::Forecast { location, json } => {
                let config = Config::load()?;
                let finder = finder_from_config(&config)?;

                let forecast = match (&location.city, location.coordinate()) {
                    (Some(city), _) => finder.find_forecast_by_city_name(city).await?,
                    (None, Some(coord)) => finder.find_forecast_by_coordinate(&coord).await?,
                    (None, None) => bail!("Specify --city or --lat/--lon"),
                };

                // Provider entries lack city and sun fields, so only the city gates output.
                if !forecast.city().is_some_and(Validatable::is_valid) {
                    bail!("The provider returned incomplete city data; nothing to show.");
                }
                tracing::debug!(
                    entries = forecast.len(),
                    complete = forecast.is_valid(),
                    "Rendering forecast"
                );

                if json {
                    println!("{}", serde_json::to_string_pretty(&forecast)?);
                } else {
                    print!("{}", output::forecast(&forecast, config.units));
                }
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let units = Select::new("Units:", Units::all().to_vec())
        .with_starting_cursor(
            Units::all().iter().position(|u| *u == config.units).unwrap_or(0),
        )
        .prompt()
        .context("Failed to read units")?;

    config.set_api_key(api_key.trim().to_string());
    config.units = units;
    config.save()?;

    tracing::info!(path = %Config::config_file_path()?.display(), "Configuration saved");
    Ok(())
}
