use std::fmt;

use serde::{Deserialize, Serialize};

/// One decoded set of weather fields for a single city.
///
/// Lives for the duration of one invocation: fetched, printed, dropped.
/// Values are passed through verbatim; no unit conversion or rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub country: String,
    pub temperature_c: f64,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_kph: f64,
}

impl fmt::Display for WeatherReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weather in {}, {}:", self.city, self.country)?;
        writeln!(f, "  Temperature: {}°C", self.temperature_c)?;
        writeln!(f, "  Condition: {}", self.condition)?;
        writeln!(f, "  Humidity: {}%", self.humidity_pct)?;
        write!(f, "  Wind Speed: {} kph", self.wind_kph)
    }
}
