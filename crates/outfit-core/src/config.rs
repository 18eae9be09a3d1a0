use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Weather lookup settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Wardrobe settings
    #[serde(default)]
    pub wardrobe: WardrobeConfig,
}

/// Temperature unit used when displaying the current temperature.
///
/// Clothing ranges are always expressed in Fahrenheit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    #[default]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a Fahrenheit reading into this unit.
    pub fn from_fahrenheit(self, fahrenheit: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => (fahrenheit - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Fahrenheit => fahrenheit,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    pub latitude: f64,
    pub longitude: f64,

    /// Place name overrides; when unset the place is reverse geocoded
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,

    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,

    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub display_unit: TemperatureUnit,
}

fn default_forecast_url() -> String {
    DEFAULT_FORECAST_URL.to_string()
}

fn default_geocode_url() -> String {
    DEFAULT_GEOCODE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        // New York City
        Self {
            latitude: 40.7128,
            longitude: -74.0060,
            city: None,
            state: None,
            forecast_url: default_forecast_url(),
            geocode_url: default_geocode_url(),
            timeout_secs: default_timeout_secs(),
            display_unit: TemperatureUnit::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobeConfig {
    /// Start every session with the built-in clothing catalog
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,

    /// Fixed seed for the random pick; unset means a fresh draw each run
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_seed_defaults() -> bool {
    true
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        Self {
            seed_defaults: default_seed_defaults(),
            rng_seed: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("outfit");

        Self {
            config_dir,
            weather: WeatherConfig::default(),
            wardrobe: WardrobeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let mut config = Self::default();
            if let Some(parent) = path.parent() {
                config.config_dir = parent.to_path_buf();
            }
            config.save_to(path)?;
            tracing::info!("Wrote default configuration to {}", path.display());
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = match path {
            Some(p) => Self::load_from(p)?,
            None => Self::load()?,
        };
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        let weather = &self.weather;
        if !weather.latitude.is_finite() || !(-90.0..=90.0).contains(&weather.latitude) {
            result.add_error("weather.latitude", "Latitude must be between -90 and 90");
        }
        if !weather.longitude.is_finite() || !(-180.0..=180.0).contains(&weather.longitude) {
            result.add_error(
                "weather.longitude",
                "Longitude must be between -180 and 180",
            );
        }

        validate_url(&weather.forecast_url, "weather.forecast_url", &mut result);
        validate_url(&weather.geocode_url, "weather.geocode_url", &mut result);

        if weather.timeout_secs == 0 {
            result.add_error("weather.timeout_secs", "Timeout must be greater than 0");
        } else if weather.timeout_secs > 120 {
            result.add_warning(
                "weather.timeout_secs",
                "Timeout is unusually long (>120 seconds)",
            );
        }

        if weather.state.is_some() && weather.city.is_none() {
            result.add_warning(
                "weather.state",
                "State is ignored unless a city is also set",
            );
        }

        if !self.wardrobe.seed_defaults {
            result.add_warning(
                "wardrobe.seed_defaults",
                "Wardrobe starts empty; add items to get recommendations",
            );
        }

        result
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("outfit");

        Ok(config_dir.join("config.toml"))
    }
}

fn validate_url(url_str: &str, field_name: &str, result: &mut ValidationResult) {
    match Url::parse(url_str) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                result.add_error(
                    field_name,
                    format!("URL must use http or https scheme, got: {}", url.scheme()),
                );
            }

            if url.host().is_none() {
                result.add_error(field_name, "URL must have a host");
            }
        }
        Err(e) => {
            result.add_error(field_name, format!("Invalid URL: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
    }

    #[test]
    fn test_invalid_url() {
        let mut config = Config::default();
        config.weather.forecast_url = "not-a-url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.forecast_url"));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = Config::default();
        config.weather.geocode_url = "ftp://localhost:8080".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let mut config = Config::default();
        config.weather.latitude = 91.0;
        config.weather.longitude = f64::NAN;
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.field == "weather.latitude"));
        assert!(result.errors.iter().any(|e| e.field == "weather.longitude"));
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let mut config = Config::default();
        config.weather.timeout_secs = 0;
        assert!(!config.validate().is_valid());
    }

    #[test]
    fn test_empty_wardrobe_is_warning() {
        let mut config = Config::default();
        config.wardrobe.seed_defaults = false;
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "wardrobe.seed_defaults"));
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.config_dir, dir.path());
        assert_eq!(config.weather.forecast_url, DEFAULT_FORECAST_URL);
    }

    #[test]
    fn test_load_from_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
config_dir = "/tmp/outfit"

[weather]
latitude = 47.6062
longitude = -122.3321
city = "Seattle"
display_unit = "celsius"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.weather.city.as_deref(), Some("Seattle"));
        assert_eq!(config.weather.display_unit, TemperatureUnit::Celsius);
        assert_eq!(config.weather.timeout_secs, 10);
        assert!(config.wardrobe.seed_defaults);
        assert_eq!(config.wardrobe.rng_seed, None);
    }

    #[test]
    fn test_load_from_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "config_dir = [").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_load_validated_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.weather.latitude = 200.0;
        config.save_to(&path).unwrap();

        let err = Config::load_validated(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("weather.latitude"));
    }

    #[test]
    fn test_celsius_conversion() {
        assert_eq!(TemperatureUnit::Celsius.from_fahrenheit(212.0), 100.0);
        assert_eq!(TemperatureUnit::Fahrenheit.from_fahrenheit(45.0), 45.0);
        assert_eq!(TemperatureUnit::Celsius.symbol(), "°C");
    }
}
