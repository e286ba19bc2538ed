use reqwest::Client;
use serde::Deserialize;

use crate::{error::Error, model::WeatherReading};

/// Production endpoint for WeatherAPI.com.
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Client for the WeatherAPI.com current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_owned())
    }

    /// Point the client at a different host, e.g. a local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    /// Fetch current conditions for `city`. One GET, no retries.
    ///
    /// `city` is free text per provider convention: city name, postal
    /// code, or "lat,long". It is sent as-is, unvalidated.
    pub async fn current(&self, city: &str) -> Result<WeatherReading, Error> {
        let url = format!("{}/current.json", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(Error::Status { status, body: truncate_body(&body) });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;
        Ok(parsed.into())
    }
}

// Wire shape of /v1/current.json. All six displayed fields are
// required; a response missing any of them is a parse error.

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    humidity: u8,
    wind_kph: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

impl From<WaResponse> for WeatherReading {
    fn from(value: WaResponse) -> Self {
        WeatherReading {
            city: value.location.name,
            country: value.location.country,
            temperature_c: value.current.temp_c,
            condition: value.current.condition.text,
            humidity_pct: value.current.humidity,
            wind_kph: value.current.wind_kph,
        }
    }
}

/// Keep error bodies readable when the provider returns an HTML page.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
