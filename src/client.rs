//! WorkOS Client
//!
//! HTTP adapter shared by the SSO and Portal services: holds the validated
//! configuration and a transport, builds authenticated requests, and applies
//! the generic success check.

use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

use crate::config::{WorkOsConfig, WorkOsConfigBuilder};
use crate::core::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestHttpTransport,
    DEFAULT_MAX_RESPONSE_SIZE,
};
use crate::error::{
    create_error_from_response, ConfigurationError, ProtocolError, WorkOsResult,
};
use crate::observability::TracingHooks;
use crate::services::{PortalService, SsoService};

/// How a request authenticates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Auth {
    /// `Authorization: Bearer <API key>`.
    Bearer,
    /// No credential header; the caller puts credentials in the body.
    None,
}

/// WorkOS API client.
pub struct WorkOsClient<T: HttpTransport = ReqwestHttpTransport> {
    config: WorkOsConfig,
    transport: Arc<T>,
}

impl WorkOsClient<ReqwestHttpTransport> {
    /// Creates a client backed by `reqwest`.
    pub fn new(config: WorkOsConfig) -> WorkOsResult<Self> {
        config.validate()?;
        let transport = ReqwestHttpTransport::with_options(config.timeout, DEFAULT_MAX_RESPONSE_SIZE)?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
        })
    }

    /// Creates a client configured from `WORKOS_API_KEY` / `WORKOS_API_HOSTNAME`.
    pub fn from_env() -> WorkOsResult<Self> {
        Self::new(WorkOsConfig::from_env()?)
    }

    /// Creates a new client builder.
    pub fn builder() -> WorkOsClientBuilder {
        WorkOsClientBuilder::new()
    }
}

impl<T: HttpTransport> WorkOsClient<T> {
    /// Create a client with a custom transport.
    pub fn with_transport(config: WorkOsConfig, transport: T) -> WorkOsResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &WorkOsConfig {
        &self.config
    }

    /// Get the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Gets the SSO service.
    pub fn sso(&self) -> SsoService<'_, T> {
        SsoService::new(self)
    }

    /// Gets the Admin Portal service.
    pub fn portal(&self) -> PortalService<'_, T> {
        PortalService::new(self)
    }

    /// Absolute URL for the given path segments, each percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> WorkOsResult<Url> {
        let invalid = || ConfigurationError::InvalidBaseUrl {
            url: self.config.base_url.clone(),
        };

        let mut url = Url::parse(&self.config.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Authenticated GET, decoded after the generic success check.
    pub(crate) async fn get<R: DeserializeOwned>(&self, url: Url) -> WorkOsResult<R> {
        let response = self
            .send(HttpMethod::Get, url, Option::<&()>::None, Auth::Bearer)
            .await?;
        decode(&ensure_success(response)?)
    }

    /// Authenticated POST, decoded after the generic success check.
    pub(crate) async fn post<R: DeserializeOwned, B: Serialize>(
        &self,
        url: Url,
        body: &B,
    ) -> WorkOsResult<R> {
        let response = self
            .send(HttpMethod::Post, url, Some(body), Auth::Bearer)
            .await?;
        decode(&ensure_success(response)?)
    }

    /// Sends a request and returns the raw response whatever its status.
    pub(crate) async fn send<B: Serialize>(
        &self,
        method: HttpMethod,
        url: Url,
        body: Option<&B>,
        auth: Auth,
    ) -> WorkOsResult<HttpResponse> {
        let request = self.build_request(method, url, body, auth)?;
        self.execute(request).await
    }

    fn build_request<B: Serialize>(
        &self,
        method: HttpMethod,
        url: Url,
        body: Option<&B>,
        auth: Auth,
    ) -> WorkOsResult<HttpRequest> {
        let mut headers = HashMap::new();
        headers.insert("user-agent".to_string(), self.config.user_agent.clone());
        headers.insert("accept".to_string(), "application/json".to_string());

        if auth == Auth::Bearer {
            let api_key = self.config.api_key()?;
            headers.insert(
                "authorization".to_string(),
                format!("Bearer {}", api_key.expose_secret()),
            );
        }

        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ProtocolError::Serialization {
                message: e.to_string(),
            })?;

        if body.is_some() {
            headers.insert("content-type".to_string(), "application/json".to_string());
        }

        Ok(HttpRequest {
            method,
            url: url.into(),
            headers,
            body,
            timeout: Some(self.config.timeout),
        })
    }

    async fn execute(&self, request: HttpRequest) -> WorkOsResult<HttpResponse> {
        let method = request.method;
        let url = request.url.clone();
        let start = Instant::now();

        TracingHooks::on_request_start(method.as_str(), &url);

        match self.transport.send(request).await {
            Ok(response) => {
                TracingHooks::on_request_complete(
                    method.as_str(),
                    &url,
                    response.status,
                    start.elapsed(),
                    response.header("x-request-id"),
                );
                Ok(response)
            }
            Err(e) => {
                TracingHooks::on_request_error(method.as_str(), &url, &e.to_string());
                Err(e)
            }
        }
    }
}

fn ensure_success(response: HttpResponse) -> WorkOsResult<HttpResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(create_error_from_response(&response))
    }
}

fn decode<R: DeserializeOwned>(response: &HttpResponse) -> WorkOsResult<R> {
    serde_json::from_str(&response.body).map_err(|e| {
        ProtocolError::InvalidJson {
            message: format!("Failed to deserialize response: {}", e),
        }
        .into()
    })
}

/// Builder for WorkOsClient.
#[derive(Default)]
pub struct WorkOsClientBuilder {
    config_builder: WorkOsConfigBuilder,
}

impl WorkOsClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.api_key(key);
        self
    }

    /// Sets the API hostname.
    pub fn api_hostname(mut self, hostname: impl AsRef<str>) -> Self {
        self.config_builder = self.config_builder.api_hostname(hostname);
        self
    }

    /// Sets the full base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(url);
        self
    }

    /// Sets the timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent(ua);
        self
    }

    /// Builds the client.
    pub fn build(self) -> WorkOsResult<WorkOsClient> {
        WorkOsClient::new(self.config_builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MockHttpTransport;
    use crate::error::WorkOsError;

    fn client(api_key: Option<&str>) -> WorkOsClient<MockHttpTransport> {
        let mut builder = WorkOsConfig::builder();
        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        WorkOsClient::with_transport(builder.build().unwrap(), MockHttpTransport::new()).unwrap()
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = client(None);
        assert_eq!(
            client.endpoint(&["sso", "authorize"]).unwrap().as_str(),
            "https://api.workos.com/sso/authorize"
        );
        assert_eq!(
            client
                .endpoint(&["draft_connections", "a/b c", "activate"])
                .unwrap()
                .as_str(),
            "https://api.workos.com/draft_connections/a%2Fb%20c/activate"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let config = WorkOsConfig::builder()
            .base_url("http://localhost:9000/proxy/")
            .build()
            .unwrap();
        let client = WorkOsClient::with_transport(config, MockHttpTransport::new()).unwrap();
        assert_eq!(
            client.endpoint(&["connections"]).unwrap().as_str(),
            "http://localhost:9000/proxy/connections"
        );
    }

    #[tokio::test]
    async fn test_bearer_request_headers() {
        let client = client(Some("sk_test"));
        client
            .transport()
            .queue_json_response(200, &serde_json::json!({"ok": true}));

        let url = client.endpoint(&["connections"]).unwrap();
        let value: serde_json::Value = client
            .post(url, &serde_json::json!({"source": "draft_conn_1"}))
            .await
            .unwrap();
        assert_eq!(value["ok"], true);

        let request = client.transport().get_last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.header("Authorization"), Some("Bearer sk_test"));
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert!(request.header("user-agent").unwrap().starts_with("workos-rust/"));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_sending() {
        let client = client(None);
        let url = client.endpoint(&["organizations"]).unwrap();
        let result: WorkOsResult<serde_json::Value> = client.get(url).await;

        assert!(matches!(
            result,
            Err(WorkOsError::Configuration(ConfigurationError::MissingApiKey))
        ));
        assert!(client.transport().get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_non_success_is_generic_error() {
        let client = client(Some("sk_test"));
        client.transport().queue_response(
            HttpResponse::new(401, r#"{"message":"Unauthorized"}"#).with_header("x-request-id", "req_401"),
        );

        let url = client.endpoint(&["organizations"]).unwrap();
        let error = client.get::<serde_json::Value>(url).await.unwrap_err();
        assert_eq!(error.status_code(), Some(401));
        assert_eq!(error.request_id(), Some("req_401"));
    }

    #[tokio::test]
    async fn test_undecodable_success_body() {
        let client = client(Some("sk_test"));
        client.transport().queue_response(HttpResponse::new(200, "not json"));

        let url = client.endpoint(&["organizations"]).unwrap();
        let error = client.get::<serde_json::Value>(url).await.unwrap_err();
        assert!(matches!(error, WorkOsError::Protocol(ProtocolError::InvalidJson { .. })));
    }

    #[test]
    fn test_client_builder() {
        let result = WorkOsClient::builder()
            .api_key("sk_test")
            .api_hostname("api.workos.test")
            .user_agent("test-client/1.0")
            .build();
        let client = result.unwrap();
        assert_eq!(client.config().base_url, "https://api.workos.test");
        assert_eq!(client.config().user_agent, "test-client/1.0");
    }
}
