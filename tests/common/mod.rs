//! Shared helpers for the WireMock integration tests.

use integrations_workos::WorkOsClient;
use wiremock::MockServer;

pub const API_KEY: &str = "sk_test_integration";

/// Starts a mock server.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with the test API key.
pub fn client_for(server: &MockServer) -> WorkOsClient {
    WorkOsClient::builder()
        .api_key(API_KEY)
        .base_url(server.uri())
        .build()
        .expect("Failed to build client")
}

/// Client pointed at the mock server without an API key.
#[allow(dead_code)]
pub fn unauthenticated_client_for(server: &MockServer) -> WorkOsClient {
    WorkOsClient::builder()
        .base_url(server.uri())
        .build()
        .expect("Failed to build client")
}
