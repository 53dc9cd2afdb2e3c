//! Tracing hooks for WorkOS API requests.
//!
//! URLs are logged without query strings and request bodies are never logged,
//! since the token exchange carries the API key in its body.

use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Tracing hooks for WorkOS API operations.
pub struct TracingHooks;

impl TracingHooks {
    /// Logs the start of an API request.
    #[instrument(skip(method, url))]
    pub fn on_request_start(method: &str, url: &str) {
        debug!(
            method = %method,
            url = %strip_query(url),
            "WorkOS API request started"
        );
    }

    /// Logs the completion of an API request.
    #[instrument(skip(method, url, status, duration, request_id))]
    pub fn on_request_complete(
        method: &str,
        url: &str,
        status: u16,
        duration: Duration,
        request_id: Option<&str>,
    ) {
        info!(
            method = %method,
            url = %strip_query(url),
            status = status,
            duration_ms = duration.as_millis() as u64,
            request_id = request_id.unwrap_or("-"),
            "WorkOS API request completed"
        );
    }

    /// Logs a request that failed before a response arrived.
    #[instrument(skip(method, url, error))]
    pub fn on_request_error(method: &str, url: &str, error: &str) {
        error!(
            method = %method,
            url = %strip_query(url),
            error = %error,
            "WorkOS API request failed"
        );
    }

    /// Logs an operation-level failure reported by the API.
    #[instrument(skip(operation, message, request_id))]
    pub fn on_api_error(operation: &str, message: &str, request_id: Option<&str>) {
        warn!(
            operation = %operation,
            message = %message,
            request_id = request_id.unwrap_or("-"),
            "WorkOS API returned an error"
        );
    }
}

fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}
