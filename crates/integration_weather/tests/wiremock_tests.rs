//! Integration tests for the forecast client using wiremock
//!
//! These tests verify the client's cache coordination and error
//! classification against a mock HTTP server.

use std::sync::Arc;

use domain::{ForecastErrorKind, Location};
use integration_weather::{WeatherApiClient, WeatherApiConfig, WeatherClient, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const API_KEY: &str = "test-weather-key";

/// Sample WeatherAPI forecast response
fn sample_forecast_response() -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": "Mountain View",
            "region": "California",
            "country": "United States of America",
            "lat": 37.42,
            "lon": -122.08,
            "tz_id": "America/Los_Angeles",
            "localtime_epoch": 1_700_000_500,
            "localtime": "2023-11-14 14:21"
        },
        "current": {
            "last_updated_epoch": 1_700_000_000,
            "last_updated": "2023-11-14 14:15",
            "temp_c": 11.2,
            "temp_f": 52.2,
            "is_day": 1,
            "condition": {
                "text": "Sunny",
                "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png",
                "code": 1000
            },
            "wind_kph": 6.1,
            "humidity": 62
        },
        "forecast": {
            "forecastday": [{
                "date": "2023-11-14",
                "date_epoch": 1_699_920_000,
                "day": {
                    "maxtemp_c": 12.5,
                    "maxtemp_f": 54.5,
                    "mintemp_c": 9.2,
                    "mintemp_f": 48.6,
                    "avgtemp_c": 10.9,
                    "condition": {
                        "text": "Partly cloudy",
                        "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png",
                        "code": 1003
                    }
                }
            }]
        }
    })
}

fn mountain_view() -> Location {
    Location::new(
        "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
        "94043",
        37.422_004_1,
        -122.083_349_4,
    )
}

/// Create a test client configured to use the mock server
fn create_test_client(mock_server: &MockServer) -> WeatherApiClient {
    let config = WeatherApiConfig {
        base_url: format!("{}/v1/forecast.json", mock_server.uri()),
        api_key: API_KEY.to_string(),
        timeout_secs: 5,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    WeatherApiClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the forecast endpoint with the given response
async fn setup_forecast_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

async fn expect_rejection(code: serde_json::Value, expected: ForecastErrorKind) {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": code,
            "message": "upstream says no"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch(&mountain_view()).await;

    match result {
        Err(WeatherError::Rejected { kind, message }) => {
            assert_eq!(kind, expected, "code {code}");
            assert_eq!(message, "upstream says no");
        },
        other => panic!("expected rejection for code {code}, got {other:?}"),
    }
}

// ============================================================================
// Success and cache scenarios
// ============================================================================

#[tokio::test]
async fn test_fetch_success_sends_key_and_coordinates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .and(query_param("key", API_KEY))
        .and(query_param("q", "37.4220041,-122.0833494"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let weather = client.fetch(&mountain_view()).await.unwrap();

    assert!((weather.current.temperature_c - 11.2).abs() < f64::EPSILON);
    assert!((weather.current.temperature_f - 52.2).abs() < f64::EPSILON);
    assert_eq!(weather.current.last_updated_epoch, 1_700_000_000);
    assert_eq!(weather.current.condition.text, "Sunny");
    assert!((weather.forecast.max_temp_c - 12.5).abs() < f64::EPSILON);
    assert!((weather.forecast.min_temp_c - 9.2).abs() < f64::EPSILON);
    assert_eq!(weather.forecast.condition.code, 1003);
    assert_eq!(weather.location, mountain_view());
    assert!(!weather.from_cache);
}

#[tokio::test]
async fn test_repeat_fetch_is_served_from_cache() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let first = client.fetch(&mountain_view()).await.unwrap();
    let second = client.fetch(&mountain_view()).await.unwrap();

    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert_eq!(first.current, second.current);
    assert_eq!(first.forecast, second.forecast);
    assert_eq!(first.location, second.location);
}

#[tokio::test]
async fn test_cache_is_keyed_by_postal_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let other_zip = Location::new("Palo Alto, CA 94301, USA", "94301", 37.44, -122.16);
    let same_zip = Location::new("Shoreline Blvd, CA 94043, USA", "94043", 37.41, -122.07);

    client.fetch(&mountain_view()).await.unwrap();
    client.fetch(&other_zip).await.unwrap();
    let hit = client.fetch(&same_zip).await.unwrap();

    assert!(hit.from_cache);
    assert_eq!(client.cache().entry_count().await, 2);
}

#[tokio::test]
async fn test_clear_cache_forces_refetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    client.fetch(&mountain_view()).await.unwrap();
    client.clear_cache();
    let refetched = client.fetch(&mountain_view()).await.unwrap();

    assert!(!refetched.from_cache);
}

#[tokio::test]
async fn test_expired_entry_is_refetched() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = WeatherApiConfig {
        base_url: format!("{}/v1/forecast.json", mock_server.uri()),
        api_key: API_KEY.to_string(),
        cache_ttl_secs: 1,
        ..Default::default()
    };
    let client = WeatherApiClient::new(config).unwrap();

    client.fetch(&mountain_view()).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(1200)).await;
    let refetched = client.fetch(&mountain_view()).await.unwrap();

    assert!(!refetched.from_cache);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_fetches_for_one_postal_code() {
    const CALLERS: usize = 16;

    let mock_server = MockServer::start().await;

    // Concurrent misses are not coalesced, so anywhere from one to every
    // caller may reach the upstream.
    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1..=CALLERS as u64)
        .mount(&mock_server)
        .await;

    let client = Arc::new(create_test_client(&mock_server));

    let handles: Vec<_> = (0..CALLERS)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.fetch(&mountain_view()).await })
        })
        .collect();

    let mut results = Vec::with_capacity(CALLERS);
    for handle in handles {
        results.push(handle.await.unwrap().unwrap());
    }

    let first = &results[0];
    for weather in &results {
        assert_eq!(weather.location, first.location);
        assert_eq!(weather.current, first.current);
        assert_eq!(weather.forecast, first.forecast);
    }
    assert!(results.iter().any(|w| !w.from_cache));

    assert_eq!(client.cache().entry_count().await, 1);
    let stored = client.cache().get("94043").await.unwrap();
    assert!(!stored.from_cache);
    assert_eq!(stored.current, first.current);

    let after = client.fetch(&mountain_view()).await.unwrap();
    assert!(after.from_cache);
}

// ============================================================================
// Classified upstream errors
// ============================================================================

#[tokio::test]
async fn test_invalid_api_key_carries_message() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": "2006",
            "message": "API key provided is invalid"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch(&mountain_view()).await;

    match result {
        Err(WeatherError::Rejected { kind, message }) => {
            assert_eq!(kind, ForecastErrorKind::InvalidApiKey);
            assert_eq!(message, "API key provided is invalid");
        },
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_every_listed_code_is_classified() {
    let table = [
        ("1002", ForecastErrorKind::MissingApiKey),
        ("1003", ForecastErrorKind::MissingQueryParameter),
        ("1005", ForecastErrorKind::InvalidRequestUrl),
        ("1006", ForecastErrorKind::LocationNotFound),
        ("9000", ForecastErrorKind::InvalidBulkJson),
        ("9001", ForecastErrorKind::TooManyBulkLocations),
        ("9999", ForecastErrorKind::InternalUpstreamError),
        ("2006", ForecastErrorKind::InvalidApiKey),
        ("2007", ForecastErrorKind::QuotaExceeded),
        ("2008", ForecastErrorKind::ApiKeyDisabled),
        ("2009", ForecastErrorKind::ApiKeyForbidden),
        ("1234", ForecastErrorKind::Generic),
    ];

    for (code, kind) in table {
        expect_rejection(serde_json::json!(code), kind).await;
    }
}

#[tokio::test]
async fn test_nested_envelope_on_error_status() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"code": 2006, "message": "API key is invalid."}
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch(&mountain_view()).await;

    assert!(matches!(
        result,
        Err(WeatherError::Rejected {
            kind: ForecastErrorKind::InvalidApiKey,
            ..
        })
    ));
}

#[tokio::test]
async fn test_failed_fetch_is_not_cached() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": "1006",
            "message": "No matching location found."
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(client.fetch(&mountain_view()).await.is_err());
    assert!(client.fetch(&mountain_view()).await.is_err());
    assert_eq!(client.cache().entry_count().await, 0);
}

// ============================================================================
// Unclassified failures
// ============================================================================

#[tokio::test]
async fn test_empty_body() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(&mock_server, ResponseTemplate::new(200)).await;

    let client = create_test_client(&mock_server);
    let result = client.fetch(&mountain_view()).await;

    assert!(matches!(result, Err(WeatherError::EmptyResponse)));
}

#[tokio::test]
async fn test_server_error_without_envelope() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(503).set_body_string("Service Unavailable"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch(&mountain_view()).await;

    assert!(matches!(
        result,
        Err(WeatherError::HttpStatus { status: 503 })
    ));
}

#[tokio::test]
async fn test_invalid_json() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("{ not valid json }"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch(&mountain_view()).await;

    assert!(matches!(result, Err(WeatherError::ParseError(_))));
}

#[tokio::test]
async fn test_missing_forecast_day() {
    let mut body = sample_forecast_response();
    body["forecast"]["forecastday"] = serde_json::json!([]);

    let mock_server = MockServer::start().await;
    setup_forecast_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let result = client.fetch(&mountain_view()).await;

    assert!(matches!(result, Err(WeatherError::MissingForecastDay)));
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(sample_forecast_response())
            .set_delay(std::time::Duration::from_secs(3)),
    )
    .await;

    let config = WeatherApiConfig {
        base_url: format!("{}/v1/forecast.json", mock_server.uri()),
        api_key: API_KEY.to_string(),
        timeout_secs: 1,
        ..Default::default()
    };
    let client = WeatherApiClient::new(config).unwrap();
    let result = client.fetch(&mountain_view()).await;

    assert!(matches!(result, Err(WeatherError::Timeout)));
}
