//! API services.

pub mod portal;
pub mod sso;

pub use portal::{CreateOrganizationRequest, ListOrganizationsParams, PortalService};
pub use sso::{AuthorizationUrlParams, SsoService};
