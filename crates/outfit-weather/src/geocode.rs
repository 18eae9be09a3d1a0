//! Reverse geocoding: convert coordinates to a city and state.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use crate::types::Location;
use reqwest::Client;
use serde::Deserialize;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
}

#[derive(Debug, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    county: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

/// City and state resolved for a coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub city: String,
    pub state: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    base_url: String,
}

impl Geocoder {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Reverse geocode a location. Returns `None` on any failure; the caller
    /// falls back to coordinates.
    pub async fn reverse(&self, location: &Location) -> Option<Place> {
        if let Some(city) = &location.city {
            return Some(Place {
                city: city.clone(),
                state: location.state.clone(),
            });
        }

        let url = format!(
            "{}?lat={}&lon={}&format=json&addressdetails=1&layer=address&zoom=10",
            self.base_url, location.latitude, location.longitude
        );

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("Reverse geocode request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Reverse geocode returned status {}", response.status());
            return None;
        }

        let body: NominatimResponse = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!("Reverse geocode parse error: {}", e);
                return None;
            }
        };

        let addr = body.address?;
        let state = addr.state.clone();

        // Prefer city > town > village > municipality for the primary place name
        let city = addr
            .city
            .or(addr.town)
            .or(addr.village)
            .or(addr.municipality)
            .or(addr.county)
            .or(addr.state)
            .or(addr.country)?;

        let state = state.filter(|s| !s.is_empty() && s != &city);

        match &state {
            Some(s) => tracing::info!("Reverse geocoded to: {}, {}", city, s),
            None => tracing::info!("Reverse geocoded to: {}", city),
        }
        Some(Place { city, state })
    }
}
