//! Admin Portal operations.

use serde::Serialize;

use crate::client::WorkOsClient;
use crate::core::HttpTransport;
use crate::error::{WorkOsError, WorkOsResult};
use crate::types::organization::PortalLink;
use crate::types::{Intent, ListResponse, Organization};

/// Request to create an organization.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CreateOrganizationRequest {
    /// Domains the organization owns.
    pub domains: Vec<String>,
    /// Organization name.
    pub name: String,
}

/// Filters and cursors for listing organizations.
#[derive(Clone, Debug, Default)]
pub struct ListOrganizationsParams {
    /// Only organizations owning one of these domains.
    pub domains: Vec<String>,
    /// Cursor for the previous page.
    pub before: Option<String>,
    /// Cursor for the next page.
    pub after: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
}

#[derive(Serialize)]
struct GenerateLinkRequest<'a> {
    intent: Intent,
    organization: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    return_url: Option<&'a str>,
}

/// Service for Admin Portal operations.
pub struct PortalService<'a, T: HttpTransport> {
    client: &'a WorkOsClient<T>,
}

impl<'a, T: HttpTransport> PortalService<'a, T> {
    /// Creates a new portal service.
    pub fn new(client: &'a WorkOsClient<T>) -> Self {
        Self { client }
    }

    /// Creates an organization.
    pub async fn create_organization(
        &self,
        request: &CreateOrganizationRequest,
    ) -> WorkOsResult<Organization> {
        if request.name.is_empty() {
            return Err(WorkOsError::invalid_argument("name is required"));
        }

        let url = self.client.endpoint(&["organizations"])?;
        self.client.post(url, request).await
    }

    /// Lists one page of organizations.
    pub async fn list_organizations(
        &self,
        params: &ListOrganizationsParams,
    ) -> WorkOsResult<ListResponse<Organization>> {
        let mut url = self.client.endpoint(&["organizations"])?;
        {
            let mut query = url.query_pairs_mut();
            for domain in &params.domains {
                query.append_pair("domains", domain);
            }
            if let Some(before) = &params.before {
                query.append_pair("before", before);
            }
            if let Some(after) = &params.after {
                query.append_pair("after", after);
            }
            if let Some(limit) = params.limit {
                query.append_pair("limit", &limit.to_string());
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        self.client.get(url).await
    }

    /// Generates a link to the Admin Portal for an organization.
    pub async fn generate_link(
        &self,
        intent: Intent,
        organization: &str,
        return_url: Option<&str>,
    ) -> WorkOsResult<String> {
        if organization.is_empty() {
            return Err(WorkOsError::invalid_argument("organization is required"));
        }

        let url = self.client.endpoint(&["portal", "generate_link"])?;
        let body = GenerateLinkRequest {
            intent,
            organization,
            return_url: return_url.filter(|u| !u.is_empty()),
        };
        let link: PortalLink = self.client.post(url, &body).await?;
        Ok(link.link)
    }
}
