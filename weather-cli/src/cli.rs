use anyhow::Result;
use clap::Parser;

use weather_core::{Config, WeatherApiClient};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Fetch current weather data for a city.")]
pub struct Cli {
    /// Name of the city to fetch weather for.
    #[arg(long)]
    pub city: String,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Credential check happens before any network activity.
        let config = Config::load()?;
        let client = WeatherApiClient::new(config.api_key);

        println!("Fetching weather data for {}...", self.city);

        let reading = client.current(&self.city).await?;
        println!("\n{reading}");

        Ok(())
    }
}
