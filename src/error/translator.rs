//! Response-to-error translation.

use serde_json::Value;

use super::{ApiError, HttpErrorKind, ProtocolError, WorkOsError, WorkOsResult};
use crate::core::HttpResponse;
use crate::types::Profile;

/// Message used when a failed response carries no usable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Error body shape returned by the WorkOS API.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WorkOsErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl WorkOsErrorResponse {
    fn into_message(self) -> Option<String> {
        self.message.or(self.error_description).or(self.error)
    }
}

/// Parse error response from HTTP body.
pub fn parse_error_response(body: &str) -> Option<WorkOsErrorResponse> {
    serde_json::from_str(body).ok()
}

/// Create the generic error for a non-2xx response.
pub fn create_error_from_response(response: &HttpResponse) -> WorkOsError {
    let status = response.status;
    let parsed = parse_error_response(&response.body).unwrap_or_default();
    let code = parsed.code.clone();
    let message = parsed
        .into_message()
        .unwrap_or_else(|| format!("HTTP {}", status));

    WorkOsError::Http {
        kind: HttpErrorKind::from_status(status),
        status,
        message,
        code,
        request_id: response.header(REQUEST_ID_HEADER).map(String::from),
    }
}

/// Decide whether a `/sso/token` response holds a profile.
///
/// The transport status is not consulted: a body with a `profile` object is
/// a success, anything else is an [`ApiError`] without an HTTP status.
pub fn translate_profile_response(response: &HttpResponse) -> WorkOsResult<Profile> {
    let request_id = response.header(REQUEST_ID_HEADER).map(String::from);

    let body: Value = match serde_json::from_str(&response.body) {
        Ok(body) => body,
        Err(_) => {
            return Err(ApiError::new(FALLBACK_ERROR_MESSAGE)
                .with_request_id(request_id)
                .into())
        }
    };

    match body.get("profile") {
        Some(profile) if !profile.is_null() => {
            decode_profile(profile, body.get("access_token")).map_err(WorkOsError::from)
        }
        _ => {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(FALLBACK_ERROR_MESSAGE);
            Err(ApiError::new(message).with_request_id(request_id).into())
        }
    }
}

fn decode_profile(profile: &Value, access_token: Option<&Value>) -> Result<Profile, ProtocolError> {
    let mut profile = profile.clone();
    if let (Value::Object(fields), Some(token)) = (&mut profile, access_token) {
        if !fields.contains_key("access_token") {
            fields.insert("access_token".to_string(), token.clone());
        }
    }

    serde_json::from_value(profile).map_err(|e| ProtocolError::InvalidResponse {
        message: format!("Failed to decode profile: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_body() -> &'static str {
        r#"{"profile":{"id":"prof_1","email":"a@b.com","first_name":"A","last_name":"B","connection_type":"OktaSAML","idp_id":"idp1","access_token":"tok1"}}"#
    }

    #[test]
    fn test_profile_success() {
        let response = HttpResponse::new(200, profile_body());
        let profile = translate_profile_response(&response).unwrap();
        assert_eq!(profile.id, "prof_1");
        assert_eq!(profile.email, "a@b.com");
        assert_eq!(profile.first_name, "A");
        assert_eq!(profile.last_name, "B");
        assert_eq!(profile.connection_type, "OktaSAML");
        assert_eq!(profile.idp_id, "idp1");
        assert_eq!(profile.access_token, "tok1");
    }

    #[test]
    fn test_profile_takes_top_level_access_token() {
        let response = HttpResponse::new(
            200,
            r#"{"access_token":"top","profile":{"id":"prof_1","email":"a@b.com","first_name":"A","last_name":"B","connection_type":"OktaSAML","idp_id":"idp1"}}"#,
        );
        let profile = translate_profile_response(&response).unwrap();
        assert_eq!(profile.access_token, "top");
    }

    #[test]
    fn test_message_and_request_id() {
        let response =
            HttpResponse::new(400, r#"{"message":"bad code"}"#).with_header("X-Request-ID", "req_123");
        let error = translate_profile_response(&response).unwrap_err();
        match error {
            WorkOsError::Api(api) => {
                assert_eq!(api.message(), "bad code");
                assert_eq!(api.request_id(), Some("req_123"));
                assert_eq!(api.http_status(), None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_body_uses_fallback() {
        let response = HttpResponse::new(502, "<html>Bad Gateway</html>");
        let error = translate_profile_response(&response).unwrap_err();
        match error {
            WorkOsError::Api(api) => {
                assert_eq!(api.message(), FALLBACK_ERROR_MESSAGE);
                assert_eq!(api.http_status(), None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_null_profile_is_failure() {
        let response = HttpResponse::new(200, r#"{"profile":null}"#);
        let error = translate_profile_response(&response).unwrap_err();
        assert!(matches!(error, WorkOsError::Api(ref api) if api.message() == FALLBACK_ERROR_MESSAGE));
    }

    #[test]
    fn test_malformed_profile_is_protocol_error() {
        let response = HttpResponse::new(200, r#"{"profile":{"id":"prof_1"}}"#);
        let error = translate_profile_response(&response).unwrap_err();
        assert!(matches!(error, WorkOsError::Protocol(ProtocolError::InvalidResponse { .. })));
    }

    #[test]
    fn test_generic_error_from_response() {
        let response = HttpResponse::new(
            422,
            r#"{"message":"Validation failed","code":"invalid_source"}"#,
        )
        .with_header("x-request-id", "req_7");
        match create_error_from_response(&response) {
            WorkOsError::Http {
                kind,
                status,
                message,
                code,
                request_id,
            } => {
                assert_eq!(kind, HttpErrorKind::InvalidRequest);
                assert_eq!(status, 422);
                assert_eq!(message, "Validation failed");
                assert_eq!(code.as_deref(), Some("invalid_source"));
                assert_eq!(request_id.as_deref(), Some("req_7"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_generic_error_without_body() {
        let response = HttpResponse::new(500, "");
        let error = create_error_from_response(&response);
        assert_eq!(error.status_code(), Some(500));
        assert!(error.to_string().contains("HTTP 500"));
    }

    #[test]
    fn test_error_description_fallback() {
        let response = HttpResponse::new(
            400,
            r#"{"error":"invalid_grant","error_description":"The code has expired"}"#,
        );
        let error = create_error_from_response(&response);
        assert!(error.to_string().contains("The code has expired"));
    }
}
