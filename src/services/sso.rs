//! SSO operations.

use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::debug;

use crate::client::{Auth, WorkOsClient};
use crate::core::{HttpMethod, HttpTransport};
use crate::error::{translate_profile_response, WorkOsError, WorkOsResult};
use crate::observability::TracingHooks;
use crate::types::{Connection, Profile, Provider};

/// Parameters for building an SSO authorization URL.
///
/// At least one of `domain` or `provider` must be set.
#[derive(Clone, Debug, Default)]
pub struct AuthorizationUrlParams {
    /// WorkOS project (client) identifier.
    pub project_id: String,
    /// Callback URI registered with the project.
    pub redirect_uri: String,
    /// Domain of the connection to sign in with.
    pub domain: Option<String>,
    /// OAuth provider to sign in with; must name a [`Provider`].
    pub provider: Option<String>,
    /// Opaque value echoed back to the redirect URI.
    pub state: Option<String>,
}

impl AuthorizationUrlParams {
    /// Create params with the required fields.
    pub fn new(project_id: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            redirect_uri: redirect_uri.into(),
            ..Default::default()
        }
    }

    /// Set domain.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set provider.
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Set state.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'static str,
    code: &'a str,
}

#[derive(Serialize)]
struct CreateConnectionRequest<'a> {
    source: &'a str,
}

/// Service for SSO operations.
pub struct SsoService<'a, T: HttpTransport> {
    client: &'a WorkOsClient<T>,
}

impl<'a, T: HttpTransport> SsoService<'a, T> {
    /// Creates a new SSO service.
    pub fn new(client: &'a WorkOsClient<T>) -> Self {
        Self { client }
    }

    /// Builds the URL to redirect a user to for SSO sign-in.
    ///
    /// No request is made. The query holds `client_id`, `redirect_uri` and
    /// `response_type=code`, followed by `state`, `domain` and `provider`
    /// when they are non-empty.
    pub fn authorization_url(&self, params: &AuthorizationUrlParams) -> WorkOsResult<String> {
        require("project_id", &params.project_id)?;
        require("redirect_uri", &params.redirect_uri)?;

        let domain = non_empty(&params.domain);
        let provider = non_empty(&params.provider);

        if domain.is_none() && provider.is_none() {
            return Err(WorkOsError::invalid_argument(
                "Either domain or provider is required.",
            ));
        }

        let provider = provider.map(str::parse::<Provider>).transpose()?;

        let mut url = self.client.endpoint(&["sso", "authorize"])?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("client_id", &params.project_id)
                .append_pair("redirect_uri", &params.redirect_uri)
                .append_pair("response_type", "code");
            if let Some(state) = non_empty(&params.state) {
                query.append_pair("state", state);
            }
            if let Some(domain) = domain {
                query.append_pair("domain", domain);
            }
            if let Some(provider) = provider {
                query.append_pair("provider", provider.as_str());
            }
        }

        Ok(url.into())
    }

    /// Exchanges an authorization code for the signed-in user's profile.
    ///
    /// The API key is sent as `client_secret` in the body rather than as a
    /// bearer header. Failures are [`WorkOsError::Api`] errors whose HTTP
    /// status is always unset.
    pub async fn profile(&self, code: &str, project_id: &str) -> WorkOsResult<Profile> {
        require("code", code)?;
        require("project_id", project_id)?;

        let api_key = self.client.config().api_key()?;
        let body = TokenRequest {
            client_id: project_id,
            client_secret: api_key.expose_secret(),
            grant_type: "authorization_code",
            code,
        };

        let url = self.client.endpoint(&["sso", "token"])?;
        let response = self
            .client
            .send(HttpMethod::Post, url, Some(&body), Auth::None)
            .await?;

        translate_profile_response(&response).inspect_err(|e| {
            if let WorkOsError::Api(api) = e {
                TracingHooks::on_api_error("sso.profile", api.message(), api.request_id());
            }
        })
    }

    /// Activates a draft connection created by the embedded setup flow.
    ///
    /// Returns `Ok(true)` for a 2xx response and `Ok(false)` for any other
    /// status; unlike the other operations an HTTP failure is not an error.
    /// Errors are limited to invalid input, missing configuration and
    /// transport failures.
    pub async fn promote_draft_connection(&self, token: &str) -> WorkOsResult<bool> {
        require("token", token)?;

        let url = self
            .client
            .endpoint(&["draft_connections", token, "activate"])?;
        let response = self
            .client
            .send(HttpMethod::Post, url, Option::<&()>::None, Auth::Bearer)
            .await?;

        let promoted = response.is_success();
        if !promoted {
            debug!(
                status = response.status,
                request_id = response.header("x-request-id").unwrap_or("-"),
                "Draft connection was not promoted"
            );
        }
        Ok(promoted)
    }

    /// Creates a connection from a draft connection token.
    pub async fn create_connection(&self, source: &str) -> WorkOsResult<Connection> {
        require("source", source)?;

        let url = self.client.endpoint(&["connections"])?;
        self.client
            .post(url, &CreateConnectionRequest { source })
            .await
    }
}

fn require(name: &str, value: &str) -> WorkOsResult<()> {
    if value.is_empty() {
        return Err(WorkOsError::invalid_argument(format!("{} is required", name)));
    }
    Ok(())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
