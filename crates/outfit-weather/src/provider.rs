//! Open-Meteo current-conditions provider.

use crate::geocode::Geocoder;
use crate::types::{CurrentWeather, Location, WeatherCondition, WeatherData, WeatherError};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

pub const USER_AGENT: &str = "outfit/0.1.0";
const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,weather_code";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<ForecastCurrent>,
}

#[derive(Debug, Deserialize)]
struct ForecastCurrent {
    temperature_2m: Option<f64>,
    apparent_temperature: Option<f64>,
    relative_humidity_2m: Option<f64>,
    wind_speed_10m: Option<f64>,
    weather_code: Option<i32>,
}

impl From<ForecastCurrent> for CurrentWeather {
    fn from(c: ForecastCurrent) -> Self {
        Self {
            temperature: c.temperature_2m,
            feels_like: c.apparent_temperature,
            humidity: c
                .relative_humidity_2m
                .filter(|h| h.is_finite())
                .map(|h| h.clamp(0.0, 100.0).round() as u8),
            wind_speed: c.wind_speed_10m,
            condition: c
                .weather_code
                .map(WeatherCondition::from_wmo_code)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    forecast_url: String,
    geocoder: Geocoder,
}

impl WeatherProvider {
    /// Build a provider against explicit forecast and geocoding endpoints.
    pub fn with_endpoints(
        forecast_url: &str,
        geocode_url: &str,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            geocoder: Geocoder::new(client.clone(), geocode_url),
            client: Arc::new(client),
            forecast_url: forecast_url.to_string(),
        })
    }

    /// Fetch current conditions for `location`, resolving its place name
    /// when the location doesn't already carry one.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, location: &Location) -> Result<WeatherData, WeatherError> {
        let latitude = location.latitude.to_string();
        let longitude = location.longitude.to_string();

        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", CURRENT_FIELDS),
                ("temperature_unit", "fahrenheit"),
                ("wind_speed_unit", "mph"),
                ("timezone", "auto"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!("Weather API returned {}: {}", status, message);
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        let current = body
            .current
            .map(CurrentWeather::from)
            .ok_or(WeatherError::MissingData("current conditions"))?;

        let mut location = location.clone();
        if let Some(place) = self.geocoder.reverse(&location).await {
            location.city = Some(place.city);
            location.state = place.state;
        }

        tracing::info!(
            temperature = ?current.temperature,
            condition = current.condition.description(),
            "Fetched current weather"
        );

        Ok(WeatherData {
            current,
            location,
            fetched_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_conversion() {
        let raw = ForecastCurrent {
            temperature_2m: Some(44.6),
            apparent_temperature: Some(40.1),
            relative_humidity_2m: Some(81.4),
            wind_speed_10m: Some(7.2),
            weather_code: Some(61),
        };
        let current = CurrentWeather::from(raw);
        assert_eq!(current.temperature, Some(44.6));
        assert_eq!(current.humidity, Some(81));
        assert_eq!(current.condition, WeatherCondition::Rain);
    }

    #[test]
    fn test_current_conversion_with_nulls() {
        let raw: ForecastCurrent = serde_json::from_str(
            r#"{"temperature_2m": null, "weather_code": null, "relative_humidity_2m": 140}"#,
        )
        .unwrap();
        let current = CurrentWeather::from(raw);
        assert_eq!(current.temperature, None);
        assert_eq!(current.humidity, Some(100));
        assert_eq!(current.condition, WeatherCondition::Clear);
    }
}
