//! Weather lookup for outfit
//!
//! Provides current conditions via the Open-Meteo API, reverse geocoding via
//! Nominatim, and the `WeatherLookup` accessors the recommendation flow reads.

pub mod geocode;
pub mod lookup;
pub mod provider;
pub mod types;

pub use geocode::{Geocoder, Place};
pub use lookup::WeatherLookup;
pub use provider::WeatherProvider;
pub use types::*;
