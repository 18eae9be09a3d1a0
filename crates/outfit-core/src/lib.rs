pub mod config;
pub mod error;

pub use config::{Config, TemperatureUnit, ValidationResult, WardrobeConfig, WeatherConfig};
pub use error::{AppError, ConfigError, WardrobeError, WeatherError};

use anyhow::Result;

/// Initialize the core application
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("Outfit core initialized");
    Ok(())
}
