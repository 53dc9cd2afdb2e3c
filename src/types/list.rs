//! List Types

use serde::{Deserialize, Serialize};

/// One page of a list endpoint, exactly as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub list_metadata: ListMetadata,
}

/// Cursors for the neighbouring pages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMetadata {
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub after: Option<String>,
}

impl<T> ListResponse<T> {
    /// True when the API reported a following page.
    pub fn has_more(&self) -> bool {
        self.list_metadata.after.is_some()
    }
}
