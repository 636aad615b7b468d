//! Integration tests for the Overpass client (wiremock-based)

use domain::{Coordinate, Restaurant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_overpass::{OverpassClient, OverpassConfig, OverpassError, PoiClient, build_query};

fn config_for_mock(base_url: &str) -> OverpassConfig {
    OverpassConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        query_timeout_secs: 5,
        ..OverpassConfig::default()
    }
}

fn center() -> Coordinate {
    Coordinate::new(40.7128, -74.006).unwrap()
}

const fn sample_elements_json() -> &'static str {
    r#"{
        "version": 0.6,
        "generator": "Overpass API",
        "elements": [
            {
                "type": "node",
                "id": 1,
                "lat": 40.0,
                "lon": -73.0
            },
            {
                "type": "way",
                "id": 2,
                "center": { "lat": 41.0, "lon": -74.0 }
            },
            {
                "type": "relation",
                "id": 3,
                "center": { "lat": 40.71, "lon": -74.01 },
                "tags": { "amenity": "restaurant", "name": "Pizza Place" }
            }
        ]
    }"#
}

#[tokio::test]
async fn test_fetch_nearby_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_elements_json()))
        .mount(&server)
        .await;

    let client = OverpassClient::new(&config_for_mock(&server.uri())).unwrap();
    let restaurants = client.fetch_nearby(center(), 1609.34).await.unwrap();

    assert_eq!(
        restaurants,
        vec![
            Restaurant::new(1, None, 40.0, -73.0),
            Restaurant::new(2, None, 41.0, -74.0),
            Restaurant::new(3, Some("Pizza Place".to_string()), 40.71, -74.01),
        ]
    );
}

#[tokio::test]
async fn test_fetch_nearby_sends_query_as_data_parameter() {
    let server = MockServer::start().await;

    let config = config_for_mock(&server.uri());
    let expected_query = integration_overpass::OverpassQuery::new(center(), 1609.34)
        .with_timeout_secs(config.query_timeout_secs)
        .to_string();

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .and(query_param("data", expected_query.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"elements": []}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = OverpassClient::new(&config).unwrap();
    let restaurants = client.fetch_nearby(center(), 1609.34).await.unwrap();
    assert!(restaurants.is_empty());
}

#[tokio::test]
async fn test_fetch_nearby_drops_malformed_elements() {
    let server = MockServer::start().await;

    let body = r#"{
        "elements": [
            { "type": "way", "id": 10, "tags": { "name": "No Geometry" } },
            { "type": "node", "id": 11, "lat": 40.0, "lon": -73.0, "tags": { "name": "Pita Hut" } }
        ]
    }"#;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = OverpassClient::new(&config_for_mock(&server.uri())).unwrap();
    let restaurants = client.fetch_nearby(center(), 800.0).await.unwrap();

    assert_eq!(restaurants.len(), 1);
    assert_eq!(restaurants[0].name, "Pita Hut");
}

#[tokio::test]
async fn test_fetch_nearby_keeps_points_with_odd_side_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "elements": [
                { "type": "node", "id": 1, "lat": 40.0, "lon": -73.0, "center": { "lat": 40.0 } },
                { "type": "node", "id": 2, "lat": 40.0, "lon": -73.0, "tags": { "name": 7 } }
            ]
        })))
        .mount(&server)
        .await;

    let client = OverpassClient::new(&config_for_mock(&server.uri())).unwrap();
    let restaurants = client.fetch_nearby(center(), 800.0).await.unwrap();

    assert_eq!(
        restaurants,
        vec![
            Restaurant::new(1, None, 40.0, -73.0),
            Restaurant::new(2, None, 40.0, -73.0),
        ]
    );
}

#[tokio::test]
async fn test_fetch_nearby_empty_result_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "version": 0.6, "elements": [] })),
        )
        .mount(&server)
        .await;

    let client = OverpassClient::new(&config_for_mock(&server.uri())).unwrap();
    let restaurants = client.fetch_nearby(center(), 800.0).await.unwrap();
    assert!(restaurants.is_empty());
}

#[tokio::test]
async fn test_fetch_nearby_server_error_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = OverpassClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.fetch_nearby(center(), 800.0).await.unwrap_err();

    assert!(matches!(err, OverpassError::RequestFailed(_)));
    assert!(err.is_network());
}

#[tokio::test]
async fn test_fetch_nearby_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = OverpassClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.fetch_nearby(center(), 800.0).await.unwrap_err();

    assert!(matches!(
        err,
        OverpassError::RateLimitExceeded {
            retry_after_secs: Some(30)
        }
    ));
    assert!(err.is_network());
}

#[tokio::test]
async fn test_fetch_nearby_gateway_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(504))
        .mount(&server)
        .await;

    let client = OverpassClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.fetch_nearby(center(), 800.0).await.unwrap_err();

    assert!(matches!(err, OverpassError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn test_fetch_nearby_invalid_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&server)
        .await;

    let client = OverpassClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.fetch_nearby(center(), 800.0).await.unwrap_err();

    assert!(matches!(err, OverpassError::ParseError(_)));
    assert!(!err.is_network());
}

#[tokio::test]
async fn test_fetch_nearby_missing_elements_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"version": 0.6}"#))
        .mount(&server)
        .await;

    let client = OverpassClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.fetch_nearby(center(), 800.0).await.unwrap_err();

    assert!(matches!(err, OverpassError::ParseError(_)));
}

#[tokio::test]
async fn test_fetch_nearby_connection_refused() {
    // Nothing listens on port 1
    let client = OverpassClient::new(&config_for_mock("http://127.0.0.1:1")).unwrap();
    let err = client.fetch_nearby(center(), 800.0).await.unwrap_err();

    assert!(err.is_network());
}

#[tokio::test]
async fn test_is_healthy() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Connected as: 1"))
        .mount(&server)
        .await;

    let client = OverpassClient::new(&config_for_mock(&server.uri())).unwrap();
    assert!(client.is_healthy().await);
}

#[tokio::test]
async fn test_is_unhealthy_on_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = OverpassClient::new(&config_for_mock(&server.uri())).unwrap();
    assert!(!client.is_healthy().await);
}

#[test]
fn test_build_query_mentions_every_geometry_kind() {
    let query = build_query(center(), 1609.34);
    for kind in ["node[", "way[", "rel["] {
        assert!(query.contains(kind), "missing {kind} in {query}");
    }
    assert!(query.contains("1609.34"));
    assert!(query.contains("40.7128"));
    assert!(query.contains("-74.006"));
}
