//! The full fetch stack — reqwest adapter, pipelines, resource state —
//! against a local wiremock server.

use std::sync::Arc;

use marquee::adapters::ReqwestHttpClient;
use marquee::api::Catalog;
use marquee::fetch::{fetch_bytes, fetch_json, FetchError};
use marquee::resource::JsonResource;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetch_json_decodes_catalog_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .and(query_param("api_key", "k"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"results":[{"id":1,"title":"Dune"}],"page":1}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let catalog = Catalog::with_base_url(server.uri(), "k");
    let client = ReqwestHttpClient::new();

    let value = fetch_json(&client, &catalog.popular()).await.unwrap();
    assert_eq!(value["results"][0]["title"].string_value(), "Dune");
    assert_eq!(value["page"].int_value(), 1);
}

#[tokio::test]
async fn error_status_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::new();
    let err = fetch_bytes(&client, &format!("{}/movie/popular", server.uri()))
        .await
        .unwrap_err();

    match err {
        FetchError::Transport(transport) => {
            assert!(transport.to_string().contains("503"));
        }
        other => panic!("Expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::new();
    let err = fetch_json(&client, &server.uri()).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn json_resource_lands_success_over_real_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/438631"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"id":438631,"title":"Dune","runtime":155}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let catalog = Catalog::with_base_url(server.uri(), "k");
    let resource = JsonResource::new(Arc::new(ReqwestHttpClient::new()));

    resource.load(&catalog.movie(438631), None).await;

    let state = resource.state();
    assert!(state.is_success());
    assert_eq!(state.data().unwrap()["runtime"].int_value(), 155);
}

#[tokio::test]
async fn json_resource_lands_error_when_server_is_down() {
    let server = MockServer::start().await;
    let url = format!("{}/movie/popular", server.uri());
    drop(server);

    let resource = JsonResource::new(Arc::new(ReqwestHttpClient::new()));
    resource.load(&url, None).await;

    let state = resource.state();
    assert!(state.is_error());
    assert!(!state.error().unwrap().is_empty());
}
