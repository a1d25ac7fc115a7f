//! Integration tests for the OpenRouteService clients (wiremock-based)

use domain::value_objects::{Coordinate, RoutePreference, TravelProfile};
use integration_ors::{
    AlternativeRoutesBody, DirectionsClient, DirectionsRequest, GeocodingClient,
    OrsDirectionsClient, OrsError, OrsGeocodingClient, SearchOptions,
};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_ors::OrsConfig;

const fn sample_features_json() -> &'static str {
    r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [77.5536, 12.9260]},
                "properties": {"label": "Kathriguppe, Bengaluru, KA, India", "layer": "neighbourhood"}
            },
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [77.5600, 12.9300]},
                "properties": {"label": "Kathriguppe Signal", "layer": "venue"}
            }
        ]
    }"#
}

const fn sample_routes_json() -> &'static str {
    r#"{
        "routes": [
            {"summary": {"distance": 5200.0, "duration": 780.0}},
            {"summary": {"distance": 6100.0, "duration": 840.0}}
        ]
    }"#
}

fn start() -> Coordinate {
    Coordinate::new(77.5946, 12.9716).unwrap()
}

fn end() -> Coordinate {
    Coordinate::new(77.6412, 12.9279).unwrap()
}

#[tokio::test]
async fn test_search_sends_key_and_bias() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .and(header("authorization", "test-key"))
        .and(query_param("text", "Kathriguppe Signal"))
        .and(query_param("layers", "venue,address,street,locality"))
        .and(query_param("boundary.country", "IN"))
        .and(query_param("size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_features_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OrsGeocodingClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let options = SearchOptions {
        layers: Some("venue,address,street,locality".to_string()),
        country: Some("IN".to_string()),
        ..SearchOptions::default()
    };

    let features = client.search("Kathriguppe Signal", &options).await.unwrap();
    assert_eq!(features.features.len(), 2);
    assert_eq!(features.features[0].lon_lat(), Some((77.5536, 12.9260)));
    assert_eq!(features.features[1].layer(), Some("venue"));
}

#[tokio::test]
async fn test_search_with_focus_point() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .and(query_param("focus.point.lon", "77.5946"))
        .and(query_param("focus.point.lat", "12.9716"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_features_json()))
        .mount(&server)
        .await;

    let client = OrsGeocodingClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let options = SearchOptions {
        focus: Some(start()),
        ..SearchOptions::default()
    };

    assert!(client.search("Majestic", &options).await.is_ok());
}

#[tokio::test]
async fn test_structured_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search/structured"))
        .and(query_param("address", "Silk Board"))
        .and(query_param("locality", "bengaluru"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_features_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OrsGeocodingClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let features = client
        .search_structured("Silk Board", "bengaluru", &SearchOptions::default())
        .await
        .unwrap();
    assert_eq!(features.features.len(), 2);
}

#[tokio::test]
async fn test_autocomplete_empty_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/autocomplete"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"type": "FeatureCollection", "features": []}"#),
        )
        .mount(&server)
        .await;

    let client = OrsGeocodingClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let features = client
        .autocomplete("zzzz", &SearchOptions::default())
        .await
        .unwrap();
    assert!(features.features.is_empty());
}

#[tokio::test]
async fn test_geocoding_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "2"))
        .mount(&server)
        .await;

    let client = OrsGeocodingClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let err = client
        .search("MG Road", &SearchOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OrsError::RateLimitExceeded {
            retry_after_secs: Some(2)
        }
    ));
}

#[tokio::test]
async fn test_geocoding_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = OrsGeocodingClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let err = client
        .search("MG Road", &SearchOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, OrsError::RequestFailed { status: 403 }));
}

#[tokio::test]
async fn test_geocoding_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = OrsGeocodingClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let err = client
        .search("MG Road", &SearchOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, OrsError::ParseError(_)));
}

#[tokio::test]
async fn test_post_directions_with_alternatives() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car"))
        .and(header("authorization", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "coordinates": [[77.5946, 12.9716], [77.6412, 12.9279]],
            "preference": "recommended",
            "instructions": false,
            "alternative_routes": {"target_count": 2, "share_factor": 0.6, "weight_factor": 1.4}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_routes_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OrsDirectionsClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let request = DirectionsRequest::between(start(), end(), RoutePreference::Recommended)
        .with_alternatives(AlternativeRoutesBody {
            target_count: 2,
            share_factor: 0.6,
            weight_factor: 1.4,
        });

    let response = client
        .post_directions(TravelProfile::DrivingCar, &request)
        .await
        .unwrap();
    let distances: Vec<_> = response.summaries().iter().map(|s| s.distance).collect();
    assert_eq!(distances, vec![Some(5200.0), Some(6100.0)]);
}

#[tokio::test]
async fn test_post_directions_bad_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-hgv"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"error": {"code": 2004, "message": "too far"}}"#),
        )
        .mount(&server)
        .await;

    let client = OrsDirectionsClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let request = DirectionsRequest::between(start(), end(), RoutePreference::Recommended);
    let err = client
        .post_directions(TravelProfile::DrivingHgv, &request)
        .await
        .unwrap_err();

    assert!(matches!(err, OrsError::RequestFailed { status: 400 }));
}

#[tokio::test]
async fn test_get_directions_geojson_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/directions/driving-car"))
        .and(query_param("start", "77.5946,12.9716"))
        .and(query_param("end", "77.6412,12.9279"))
        .and(query_param("preference", "shortest"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"summary": {"distance": 4800.0, "duration": 700.0}}}
            ]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = OrsDirectionsClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let response = client
        .get_directions(TravelProfile::DrivingCar, start(), end(), RoutePreference::Shortest)
        .await
        .unwrap();
    assert_eq!(response.summaries()[0].distance, Some(4800.0));
}

#[tokio::test]
async fn test_connection_refused() {
    let config = OrsConfig::for_testing("http://127.0.0.1:1");
    let client = OrsDirectionsClient::new(&config).unwrap();
    let err = client
        .get_directions(
            TravelProfile::DrivingCar,
            start(),
            end(),
            RoutePreference::Recommended,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, OrsError::ConnectionFailed(_)));
}
