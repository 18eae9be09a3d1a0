//! Accessors the recommendation flow reads from a weather reading.

use crate::types::{WeatherData, WeatherError};

/// Source of the two values an outfit pass needs.
///
/// Both accessors fail on missing or malformed data; callers must handle the
/// error before touching any recommendation state.
pub trait WeatherLookup {
    /// Current temperature in Fahrenheit.
    fn current_temperature(&self) -> Result<f64, WeatherError>;

    /// Human-readable place, e.g. "Seattle, Washington".
    fn location_label(&self) -> Result<String, WeatherError>;
}

impl WeatherLookup for WeatherData {
    fn current_temperature(&self) -> Result<f64, WeatherError> {
        match self.current.temperature {
            Some(t) if t.is_finite() => Ok(t),
            _ => Err(WeatherError::MissingData("temperature")),
        }
    }

    fn location_label(&self) -> Result<String, WeatherError> {
        let loc = &self.location;
        let city = loc.city.as_deref().map(str::trim).filter(|c| !c.is_empty());
        let state = loc.state.as_deref().map(str::trim).filter(|s| !s.is_empty());

        match (city, state) {
            (Some(city), Some(state)) if city != state => Ok(format!("{}, {}", city, state)),
            (Some(city), _) => Ok(city.to_string()),
            _ if loc.latitude.is_finite() && loc.longitude.is_finite() => {
                Ok(format!("{:.2}, {:.2}", loc.latitude, loc.longitude))
            }
            _ => Err(WeatherError::MissingData("location")),
        }
    }
}
