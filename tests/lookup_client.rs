use std::{net::TcpListener, time::Duration};

use bin_status::{config::LookupConfig, BinLookup, LookupClient, LookupError};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> LookupClient {
    LookupClient::new(&LookupConfig {
        base_url: format!("{}/api/status", server.uri()),
        timeout_secs: Some(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_lookup_parses_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .and(query_param("bin", "411111"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bin": "411111",
            "status": "YES",
            "response": "VBV Enrolled"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).lookup("411111").await.unwrap();

    assert_eq!(response.bin, "411111");
    assert_eq!(response.status, "YES");
    assert_eq!(response.response, "VBV Enrolled");
}

#[tokio::test]
async fn test_missing_field_is_schema_fault() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bin": "411111",
            "status": "YES"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).lookup("411111").await.unwrap_err();
    assert!(matches!(err, LookupError::Schema { ref bin, .. } if bin == "411111"));
}

#[tokio::test]
async fn test_non_json_body_is_schema_fault() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).lookup("411111").await.unwrap_err();
    assert!(matches!(err, LookupError::Schema { .. }));
}

#[tokio::test]
async fn test_server_error_is_transport_fault() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).lookup("411111").await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_fault() {
    // bind then release a port so nothing is listening on it
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = LookupClient::new(&LookupConfig {
        base_url: format!("http://127.0.0.1:{}/api/status", port),
        timeout_secs: Some(5),
    })
    .unwrap();

    let err = client.lookup("411111").await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(ref e) if e.is_connect()));
}

#[tokio::test]
async fn test_slow_reply_is_transport_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "bin": "411111",
                    "status": "YES",
                    "response": "VBV Enrolled"
                }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = LookupClient::new(&LookupConfig {
        base_url: format!("{}/api/status", server.uri()),
        timeout_secs: Some(1),
    })
    .unwrap();

    let err = client.lookup("411111").await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(ref e) if e.is_timeout()));
}
