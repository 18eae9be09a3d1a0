//! Integration tests for WeatherProvider using wiremock.
//!
//! These tests verify fetching and geocoding against mock HTTP servers.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::time::Duration;

use outfit_weather::{Location, WeatherCondition, WeatherError, WeatherLookup, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast_body(temperature: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "latitude": 47.6,
        "longitude": -122.3,
        "current": {
            "time": "2026-01-30T12:00",
            "interval": 900,
            "temperature_2m": temperature,
            "apparent_temperature": 41.0,
            "relative_humidity_2m": 77,
            "wind_speed_10m": 5.4,
            "weather_code": 3
        }
    })
}

fn provider_for(server: &MockServer) -> WeatherProvider {
    WeatherProvider::with_endpoints(
        &format!("{}/v1/forecast", server.uri()),
        &format!("{}/reverse", server.uri()),
        Duration::from_secs(5),
    )
    .unwrap()
}

async fn mount_geocode(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "display_name": "Seattle, King County, Washington, United States",
            "address": {
                "city": "Seattle",
                "county": "King County",
                "state": "Washington",
                "country": "United States"
            }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_success_with_geocoding() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("temperature_unit", "fahrenheit"))
        .and(query_param("latitude", "47.6062"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(serde_json::json!(45.3))))
        .mount(&mock_server)
        .await;
    mount_geocode(&mock_server).await;

    let provider = provider_for(&mock_server);
    let data = provider
        .fetch(&Location::new(47.6062, -122.3321))
        .await
        .unwrap();

    assert_eq!(data.current_temperature().unwrap(), 45.3);
    assert_eq!(data.current.condition, WeatherCondition::Cloudy);
    assert_eq!(data.current.humidity, Some(77));
    assert_eq!(data.location_label().unwrap(), "Seattle, Washington");
}

#[tokio::test]
async fn test_fetch_keeps_configured_place() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(serde_json::json!(70.0))))
        .mount(&mock_server)
        .await;
    // Geocoding must not be called when the place is already known
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let location = Location::new(40.7128, -74.006)
        .with_place(Some("New York".into()), Some("NY".into()));
    let data = provider.fetch(&location).await.unwrap();

    assert_eq!(data.location_label().unwrap(), "New York, NY");
}

#[tokio::test]
async fn test_fetch_geocode_failure_falls_back_to_coordinates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(serde_json::json!(50.0))))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let data = provider
        .fetch(&Location::new(47.6062, -122.3321))
        .await
        .unwrap();

    assert_eq!(data.location_label().unwrap(), "47.61, -122.33");
}

#[tokio::test]
async fn test_fetch_null_temperature_fails_on_access() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(serde_json::Value::Null)))
        .mount(&mock_server)
        .await;
    mount_geocode(&mock_server).await;

    let provider = provider_for(&mock_server);
    let data = provider
        .fetch(&Location::new(47.6062, -122.3321))
        .await
        .unwrap();

    assert!(matches!(
        data.current_temperature(),
        Err(WeatherError::MissingData("temperature"))
    ));
}

#[tokio::test]
async fn test_fetch_missing_current_block() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latitude": 47.6,
            "longitude": -122.3
        })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let result = provider.fetch(&Location::new(47.6062, -122.3321)).await;

    assert!(matches!(result, Err(WeatherError::MissingData(_))));
}

#[tokio::test]
async fn test_fetch_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Latitude must be in range"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let result = provider.fetch(&Location::new(147.0, 0.0)).await;

    match result {
        Err(WeatherError::Api { status, message }) => {
            assert_eq!(status, 400);
            assert!(message.contains("Latitude"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let result = provider.fetch(&Location::new(47.6062, -122.3321)).await;

    assert!(matches!(result, Err(WeatherError::Parse(_))));
}
