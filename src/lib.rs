//! Device configuration for a CO2 monitor with an RGB air-quality light.
//!
//! [`config`] holds the credentials and thresholds baked in at build time,
//! [`co2`] turns a reading into the band that drives the light.

pub mod co2;
pub mod config;
pub mod logging;
mod time_utils;

pub use co2::{Co2Band, Co2Thresholds, IndicatorColor};
pub use config::{CONFIG, Config, ConfigError};
