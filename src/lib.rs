//! WorkOS Integration Module
//!
//! Client for the WorkOS SSO and Admin Portal APIs.
//!
//! # Features
//!
//! - SSO authorization URL construction (no network call)
//! - Authorization code exchange for a user [`Profile`]
//! - Draft connection promotion and connection creation
//! - Organization management and Admin Portal links
//!
//! # Example
//!
//! ```rust,no_run
//! use integrations_workos::{AuthorizationUrlParams, WorkOsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WorkOsClient::builder().api_key("sk_test_123").build()?;
//!
//!     let url = client.sso().authorization_url(
//!         &AuthorizationUrlParams::new("project_123", "https://myapp.com/callback")
//!             .domain("foo-corp.com"),
//!     )?;
//!     println!("Redirect to: {}", url);
//!
//!     // After the redirect lands on the callback with `?code=...`:
//!     let profile = client.sso().profile("code_from_callback", "project_123").await?;
//!     println!("Signed in: {}", profile.email);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error contract
//!
//! Every operation returns [`WorkOsResult`] except that
//! [`SsoService::promote_draft_connection`] reports a rejected promotion as
//! `Ok(false)` instead of an error. Profile exchange failures are
//! [`WorkOsError::Api`] values with no HTTP status; other non-2xx responses
//! are [`WorkOsError::Http`] values carrying the status.
//!
//! # Architecture
//!
//! - `types`: value objects and the `Provider`/`Intent` sets
//! - `error`: error hierarchy and response translation
//! - `config`: client configuration and builder
//! - `core`: HTTP transport abstraction
//! - `client`: HTTP adapter and service accessors
//! - `services`: SSO and Admin Portal operations
//! - `observability`: tracing hooks

pub mod client;
pub mod config;
pub mod core;
pub mod error;
pub mod observability;
pub mod services;
pub mod types;

// Re-export main client
pub use client::{WorkOsClient, WorkOsClientBuilder};

// Re-export configuration
pub use config::{WorkOsConfig, WorkOsConfigBuilder, DEFAULT_API_HOSTNAME};

// Re-export errors
pub use error::{
    ApiError, ConfigurationError, HttpErrorKind, NetworkError, ProtocolError, WorkOsError,
    WorkOsResult, FALLBACK_ERROR_MESSAGE,
};

// Re-export transport
pub use crate::core::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, MockHttpTransport, ReqwestHttpTransport,
};

// Re-export services
pub use services::{
    AuthorizationUrlParams, CreateOrganizationRequest, ListOrganizationsParams, PortalService,
    SsoService,
};

// Re-export types
pub use types::{
    Connection, ConnectionDomain, Intent, ListMetadata, ListResponse, Organization,
    OrganizationDomain, Profile, Provider,
};
