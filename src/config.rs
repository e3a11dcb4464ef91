//! Configuration management for the export pipeline.
//!
//! This module handles loading and validating configuration from environment
//! variables. Every variable has a default, so `from_env` only fails on a
//! value that is present but invalid.

use crate::error::{ConfigError, ConfigResult};
use crate::export::raster::DEFAULT_RASTER_SCALE;
use std::env;
use std::path::PathBuf;

/// Configuration for the export pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory exported artifacts are written to (default: ".")
    pub output_dir: PathBuf,

    /// Rasterization supersampling factor (default: 2, must be at least 1)
    pub raster_scale: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `RESUME_OUTPUT_DIR`: Directory for exported documents (default: ".")
    /// - `RESUME_RASTER_SCALE`: Supersampling factor (default: 2)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let output_dir = env::var("RESUME_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let raster_scale = Self::parse_env_u8("RESUME_RASTER_SCALE", DEFAULT_RASTER_SCALE)?;

        if raster_scale == 0 {
            return Err(ConfigError::InvalidValue {
                var: "RESUME_RASTER_SCALE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            output_dir,
            raster_scale,
            log_level,
        })
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from("."),
            raster_scale: DEFAULT_RASTER_SCALE,
            log_level: "error".to_string(),
        }
    }
}
