//! Organization Types

use serde::{Deserialize, Serialize};

/// An organization managed through the Admin Portal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Organization {
    /// Organization identifier (`org_...`).
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub domains: Vec<OrganizationDomain>,
}

/// A domain owned by an organization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct OrganizationDomain {
    pub id: String,
    pub domain: String,
}

/// Admin Portal link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct PortalLink {
    pub link: String,
}
