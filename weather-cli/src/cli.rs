use anyhow::Context;
use clap::{Parser, Subcommand};

use weather_core::{Config, WeatherClient, WeatherError, WeatherModel};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather, by city or coordinates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Show current weather for a city name.
    City {
        /// City name, e.g. "Tokyo" or "New York".
        name: String,
    },

    /// Show current weather for a coordinate pair.
    Coords {
        /// Latitude in decimal degrees.
        lat: f64,

        /// Longitude in decimal degrees.
        lon: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::City { name } => {
                let client = client_from_config()?;
                report(client.fetch_by_city(&name).await);
                Ok(())
            }
            Command::Coords { lat, lon } => {
                let client = client_from_config()?;
                report(client.fetch_by_coordinates(lat, lon).await);
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

fn client_from_config() -> anyhow::Result<WeatherClient> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;
    Ok(WeatherClient::new(api_key))
}

/// Print a fetch outcome. `Unknown` gets a generic line here, at the
/// presentation boundary; `Custom` shows the provider's own message.
fn report(result: Result<WeatherModel, WeatherError>) {
    match result {
        Ok(model) => {
            println!("{}", model.city_name);
            println!(
                "  {} °C  {}  [{}]",
                model.temperature_display(),
                model.condition_description,
                model.condition_image()
            );
        }
        Err(WeatherError::Custom(message)) => eprintln!("Error: {message}"),
        Err(WeatherError::Unknown) => {
            eprintln!("Error: could not fetch the weather, please try again later");
        }
    }
}
