//! Centralized error types for the outfit application.
//!
//! Crate-local errors (wardrobe, weather) are mapped into these at the
//! binary boundary so every failure has:
//! - A precise variant for handling
//! - A user-friendly message suitable for an alert
//! - The underlying reason for logging

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` for a short, non-technical message and `alert()`
/// for the full text shown to the user.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Wardrobe error: {0}")]
    Wardrobe(#[from] WardrobeError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Wardrobe(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }

    /// Full alert text: the user message plus the underlying reason where the
    /// user needs it to act.
    pub fn alert(&self) -> String {
        match self {
            AppError::Wardrobe(WardrobeError::InvalidCategory(name)) => {
                format!("Error: {} ({})", self.user_message(), name)
            }
            AppError::Weather(WeatherError::FetchFailed(reason)) => {
                format!("Error: Failed to fetch weather data: {}", reason)
            }
            _ => format!("Error: {}", self.user_message()),
        }
    }
}

/// Wardrobe mutation errors.
#[derive(Debug, Error)]
pub enum WardrobeError {
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
}

impl WardrobeError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WardrobeError::InvalidCategory(_) => "Invalid category",
        }
    }
}

/// Weather lookup errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Any failure of the weather collaborator, with its reason.
    #[error("Failed to fetch weather data: {0}")]
    FetchFailed(String),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::FetchFailed(_) => "Failed to fetch weather data.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}
