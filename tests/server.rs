//! End-to-end tests against a real listener on an ephemeral port.

use std::net::SocketAddr;
use std::time::Duration;

use axum_server::Handle;
use serde_json::{json, Value};

use hello_service::config::AppConfig;
use hello_service::create_router;
use hello_service::http::{start_server, ServerError};

async fn spawn_server() -> (SocketAddr, Handle, tokio::task::JoinHandle<Result<(), ServerError>>) {
    let mut config = AppConfig::default();
    config.http.host = "127.0.0.1".to_string();
    config.http.port = 0;

    let handle = Handle::new();
    let server_handle = handle.clone();
    let task = tokio::spawn(async move { start_server(create_router(), &config, server_handle).await });

    let addr = handle.listening().await.expect("server bound");
    (addr, handle, task)
}

#[tokio::test]
async fn serves_both_endpoints_over_tcp() {
    let (addr, handle, task) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Hello, World!" }));

    let response = client.get(format!("http://{addr}/health")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok" }));

    let response = client.get(format!("http://{addr}/missing")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
    let result = tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .expect("server stops after shutdown")
        .expect("server task did not panic");
    assert!(result.is_ok());
}

#[tokio::test]
async fn invalid_host_fails_before_binding() {
    let mut config = AppConfig::default();
    config.http.host = "not a host".to_string();

    let result = start_server(create_router(), &config, Handle::new()).await;
    assert!(matches!(result, Err(ServerError::Address(_))));
}

#[tokio::test]
async fn address_in_use_is_reported() {
    let (addr, handle, _task) = spawn_server().await;

    let mut config = AppConfig::default();
    config.http.host = addr.ip().to_string();
    config.http.port = addr.port();

    let result = start_server(create_router(), &config, Handle::new()).await;
    assert!(matches!(result, Err(ServerError::Server(_))));

    handle.shutdown();
}
