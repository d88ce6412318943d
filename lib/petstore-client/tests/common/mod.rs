#![allow(dead_code, missing_docs, clippy::expect_used)]

use rstest::fixture;
use tracing::info;
use wiremock::MockServer;

use petstore_client::ApiClient;

pub const API_KEY: &str = "special-key";

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

#[fixture]
pub async fn server() -> MockServer {
    init_tracing();
    MockServer::start().await
}

/// A client pointing at the `/api/v3` base path of the mock server.
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::builder()
        .with_base_url(&format!("{}/api/v3", server.uri()))
        .expect("valid base url")
        .with_api_key(API_KEY)
        .build()
        .expect("client")
}

/// The query strings of every request the mock server received.
pub async fn received_queries(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.query().map(ToString::to_string))
        .collect()
}
