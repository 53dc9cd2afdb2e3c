//! WorkOS Error Types
//!
//! Error hierarchy for the WorkOS client, plus the translators that turn raw
//! HTTP responses into typed errors.

mod translator;

pub use translator::{
    create_error_from_response, parse_error_response, translate_profile_response,
    WorkOsErrorResponse, FALLBACK_ERROR_MESSAGE,
};

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Root error type for the WorkOS client.
#[derive(Error, Debug)]
pub enum WorkOsError {
    /// Input rejected before any request was sent.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Failure reported by the profile exchange endpoint.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Non-2xx response from an endpoint without bespoke translation.
    #[error("HTTP {status} [{kind}]: {message}")]
    Http {
        kind: HttpErrorKind,
        status: u16,
        message: String,
        code: Option<String>,
        request_id: Option<String>,
    },

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

impl WorkOsError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "WORKOS_INVALID_ARGUMENT",
            Self::Api(_) => "WORKOS_API",
            Self::Http { .. } => "WORKOS_HTTP",
            Self::Configuration(_) => "WORKOS_CONFIG",
            Self::Network(_) => "WORKOS_NETWORK",
            Self::Protocol(_) => "WORKOS_PROTOCOL",
        }
    }

    /// HTTP status carried by the error, if any.
    ///
    /// Profile exchange failures never carry a status, even when the
    /// transport received one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => e.http_status(),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server request id (`x-request-id`), if any.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api(e) => e.request_id(),
            Self::Http { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// Returns true for caller mistakes that never reached the network.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Error produced by the profile exchange translator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    message: String,
    http_status: Option<u16>,
    request_id: Option<String>,
}

impl ApiError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            http_status: None,
            request_id: None,
        }
    }

    pub(crate) fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Error message returned by the API.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the failed response.
    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    /// Request id for correlating with WorkOS support.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(status) = self.http_status {
            write!(f, " (HTTP {})", status)?;
        }
        if let Some(ref id) = self.request_id {
            write!(f, " [request_id: {}]", id)?;
        }
        Ok(())
    }
}

/// Category of a generic HTTP failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorKind {
    /// 400 or 422.
    InvalidRequest,
    /// 401.
    Authentication,
    /// 403.
    Forbidden,
    /// 404.
    NotFound,
    /// 409.
    Conflict,
    /// 429.
    RateLimited,
    /// 5xx.
    Server,
    /// Anything else.
    Unknown,
}

impl HttpErrorKind {
    /// Maps HTTP status code to error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::InvalidRequest,
            401 => Self::Authentication,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            429 => Self::RateLimited,
            500..=599 => Self::Server,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for HttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::Authentication => write!(f, "authentication"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::Conflict => write!(f, "conflict"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::Server => write!(f, "server_error"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Configuration error.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("API key is not configured; set it on the config or via WORKOS_API_KEY")]
    MissingApiKey,

    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl { url: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Network/transport error.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Request timeout after {timeout:?}")]
    Timeout { timeout: Duration },
}

/// Response parsing and request encoding error.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    #[error("Response too large: {size} bytes")]
    ResponseTooLarge { size: usize },

    #[error("Failed to serialize request body: {message}")]
    Serialization { message: String },
}

/// Result type for WorkOS operations.
pub type WorkOsResult<T> = Result<T, WorkOsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new("bad code").with_request_id(Some("req_123".to_string()));
        let display = error.to_string();
        assert!(display.contains("bad code"));
        assert!(display.contains("req_123"));
        assert!(!display.contains("HTTP"));
    }

    #[test]
    fn test_status_and_request_id_accessors() {
        let error = WorkOsError::Http {
            kind: HttpErrorKind::NotFound,
            status: 404,
            message: "Not found".to_string(),
            code: None,
            request_id: Some("req_9".to_string()),
        };
        assert_eq!(error.status_code(), Some(404));
        assert_eq!(error.request_id(), Some("req_9"));
        assert_eq!(error.error_code(), "WORKOS_HTTP");

        let error = WorkOsError::from(ApiError::new("nope"));
        assert_eq!(error.status_code(), None);
        assert_eq!(error.request_id(), None);
    }

    #[test]
    fn test_kind_from_status() {
        assert_eq!(HttpErrorKind::from_status(400), HttpErrorKind::InvalidRequest);
        assert_eq!(HttpErrorKind::from_status(422), HttpErrorKind::InvalidRequest);
        assert_eq!(HttpErrorKind::from_status(401), HttpErrorKind::Authentication);
        assert_eq!(HttpErrorKind::from_status(503), HttpErrorKind::Server);
        assert_eq!(HttpErrorKind::from_status(418), HttpErrorKind::Unknown);
    }

    #[test]
    fn test_invalid_argument() {
        let error = WorkOsError::invalid_argument("project_id is required");
        assert!(error.is_invalid_argument());
        assert_eq!(error.to_string(), "Invalid argument: project_id is required");
    }
}
