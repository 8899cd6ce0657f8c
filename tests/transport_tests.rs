//! Transport integration tests
//!
//! Run the real reqwest transport against a local mock server

use httpmock::prelude::*;
use placesapi::*;
use serde_json::json;
use std::time::Duration;

const API_KEY: &str = "sk-test-places-key";

fn legacy_client(server: &MockServer) -> PlacesClient {
    let config = Configuration::new(API_KEY, ApiVersion::Legacy)
        .unwrap()
        .with_base_url(server.url("/maps/api/place"))
        .unwrap();
    PlacesClient::new(config).unwrap()
}

fn new_client(server: &MockServer) -> PlacesClient {
    let config = Configuration::new(API_KEY, ApiVersion::New)
        .unwrap()
        .with_base_url(server.url("/v1/places"))
        .unwrap();
    PlacesClient::new(config).unwrap()
}

#[tokio::test]
async fn test_legacy_text_search_over_http() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/maps/api/place/textsearch/json")
                .query_param("query", "Eiffel Tower")
                .query_param("key", API_KEY);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"status":"OK","results":[{"name":"Eiffel Tower"}]}"#);
        })
        .await;

    let response = legacy_client(&server).text_search_query("Eiffel Tower").await.unwrap();

    mock.assert_async().await;
    assert_eq!(response["status"], "OK");
    assert_eq!(response["results"][0]["name"], "Eiffel Tower");
}

#[tokio::test]
async fn test_legacy_query_is_html_escaped() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/maps/api/place/textsearch/json")
                .query_param("query", "Fish &amp; Chips");
            then.status(200).body(r#"{"status":"ZERO_RESULTS","results":[]}"#);
        })
        .await;

    let response = legacy_client(&server).text_search_query("Fish & Chips").await.unwrap();

    mock.assert_async().await;
    assert_eq!(response["status"], "ZERO_RESULTS");
}

#[tokio::test]
async fn test_legacy_nearby_and_find_place_over_http() {
    let server = MockServer::start_async().await;
    let nearby = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/maps/api/place/nearbysearch/json")
                .query_param("location", "48.858844,2.294351")
                .query_param("radius", "1000")
                .query_param("type", "restaurant")
                .query_param("included_types", "restaurant,cafe");
            then.status(200).body(r#"{"status":"OK","results":[{"name":"Le Jules Verne"}]}"#);
        })
        .await;
    let find = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/maps/api/place/findplacefromtext/json")
                .query_param("input", "Eiffel Tower")
                .query_param("inputtype", "textquery")
                .query_param("fields", "name,place_id");
            then.status(200).body(r#"{"status":"OK","candidates":[{"name":"Eiffel Tower"}]}"#);
        })
        .await;

    let client = legacy_client(&server);
    client
        .nearby_search(
            &NearbySearchRequest::new(48.858844, 2.294351, 1000)
                .with_type("restaurant")
                .with_included_types(["restaurant", "cafe"]),
        )
        .await
        .unwrap();
    let found = client
        .find_place(&FindPlaceRequest::new("Eiffel Tower", InputType::TextQuery).with_fields(["name", "place_id"]))
        .await
        .unwrap();

    nearby.assert_async().await;
    find.assert_async().await;
    assert_eq!(found["candidates"][0]["name"], "Eiffel Tower");
}

#[tokio::test]
async fn test_new_text_search_over_http() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/places:searchText")
                .header("x-goog-api-key", API_KEY)
                .header("x-goog-fieldmask", "places.displayName")
                .json_body(json!({"textQuery": "museums in Paris", "regionCode": "fr"}));
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"places":[{"displayName":{"text":"Louvre"}}]}"#);
        })
        .await;

    let response = new_client(&server)
        .text_search(
            &TextSearchRequest::new("museums in Paris")
                .with_param("regionCode", "fr")
                .with_field_mask("places.displayName"),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response["places"][0]["displayName"]["text"], "Louvre");
}

#[tokio::test]
async fn test_new_place_details_over_http() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/places/ChIJN1t_tDeuEmsRUsoyG83frY4")
                .header("x-goog-api-key", API_KEY)
                .header("x-goog-fieldmask", "formattedAddress,displayName");
            then.status(200).body(
                r#"{"displayName":{"text":"Google Sydney"},"formattedAddress":"48 Pirrama Rd, Pyrmont NSW 2009"}"#,
            );
        })
        .await;

    let response = new_client(&server)
        .get_place_details(
            &PlaceDetailsRequest::new("ChIJN1t_tDeuEmsRUsoyG83frY4").with_fields("formattedAddress,displayName"),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response["displayName"]["text"], "Google Sydney");
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/places:searchNearby");
            then.status(403)
                .body(r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#);
        })
        .await;

    let err = new_client(&server)
        .nearby_search(&NearbySearchRequest::new(40.7, -74.0, 1500))
        .await
        .unwrap_err();

    match err {
        PlacesError::Http { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("Expected HTTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/maps/api/place/details/json");
            then.status(200).body("<html>Service Unavailable</html>");
        })
        .await;

    let err = legacy_client(&server).place_details("abc").await.unwrap_err();

    assert!(matches!(err, PlacesError::Decode(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = Configuration::new(API_KEY, ApiVersion::Legacy)
        .unwrap()
        .with_base_url(format!("http://127.0.0.1:{}/maps/api/place", port))
        .unwrap();

    let err = PlacesClient::new(config).unwrap().text_search_query("x").await.unwrap_err();

    assert!(matches!(err, PlacesError::Network(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/places:searchText");
            then.status(200).delay(Duration::from_secs(2)).body(r#"{"places":[]}"#);
        })
        .await;

    let config = Configuration::new(API_KEY, ApiVersion::New)
        .unwrap()
        .with_base_url(server.url("/v1/places"))
        .unwrap()
        .with_timeout(Duration::from_millis(200))
        .unwrap();

    let err = PlacesClient::new(config).unwrap().text_search_query("slow").await.unwrap_err();

    match err {
        PlacesError::Network(message) => assert!(message.contains("timed out")),
        other => panic!("Expected network error, got {:?}", other),
    }
}
