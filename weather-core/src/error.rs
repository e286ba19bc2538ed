use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between startup and printing a reading.
///
/// The fetch path returns these as values; deciding to terminate the
/// process is the caller's job.
#[derive(Debug, Error)]
pub enum Error {
    /// Credential missing or empty. Detected before any network activity.
    #[error("API_KEY is not set. Please add it to your .env file.")]
    MissingApiKey,

    /// A `.env` file exists but could not be read.
    #[error("failed to read env file {path}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport-level failure: DNS, connection refused, timeout.
    #[error("error fetching weather data: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status code.
    #[error("WeatherAPI request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The body was not the JSON shape we expect.
    #[error("failed to parse WeatherAPI current JSON: {0}")]
    Json(#[from] serde_json::Error),
}
