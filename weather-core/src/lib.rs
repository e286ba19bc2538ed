//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credential handling (`API_KEY`, optional `.env` file)
//! - A client for the WeatherAPI.com current-conditions endpoint
//! - The shared domain model (`WeatherReading`)
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::Error;
pub use model::WeatherReading;
pub use provider::WeatherApiClient;
