//! Core library for the `weather` app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeatherMap current-conditions client
//! - Domain models, including the condition-code image mapping
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::WeatherClient;
pub use config::Config;
pub use error::WeatherError;
pub use model::{ConditionImage, WeatherModel};
