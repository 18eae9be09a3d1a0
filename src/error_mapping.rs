//! Maps crate-local errors to outfit_core::AppError for consistent user-facing messages.

use outfit_core::{AppError, WardrobeError, WeatherError};

/// Extension trait for converting library errors to the application error.
pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}

impl IntoAppError for outfit_wardrobe::WardrobeError {
    fn into_app_error(self) -> AppError {
        match self {
            outfit_wardrobe::WardrobeError::InvalidCategory { name } => {
                AppError::Wardrobe(WardrobeError::InvalidCategory(name))
            }
        }
    }
}

impl IntoAppError for outfit_weather::WeatherError {
    fn into_app_error(self) -> AppError {
        AppError::Weather(WeatherError::FetchFailed(self.to_string()))
    }
}
