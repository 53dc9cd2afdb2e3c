//! Profile Types

use serde::{Deserialize, Serialize};

/// A user authenticated through an SSO connection.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Profile {
    /// Profile identifier (`prof_...`).
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Type of the connection the user signed in through.
    pub connection_type: String,
    /// User identifier at the identity provider.
    pub idp_id: String,
    /// Access token issued with this profile.
    pub access_token: String,
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("connection_type", &self.connection_type)
            .field("idp_id", &self.idp_id)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}
