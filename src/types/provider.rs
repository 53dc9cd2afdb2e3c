//! Identity Provider Types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WorkOsError;

/// Identity providers accepted by the authorize endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    GoogleOAuth,
    MicrosoftOAuth,
    GitHubOAuth,
    AppleOAuth,
}

impl Provider {
    /// Every accepted provider.
    pub const ALL: [Provider; 4] = [
        Self::GoogleOAuth,
        Self::MicrosoftOAuth,
        Self::GitHubOAuth,
        Self::AppleOAuth,
    ];

    /// Wire value sent as the `provider` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoogleOAuth => "GoogleOAuth",
            Self::MicrosoftOAuth => "MicrosoftOAuth",
            Self::GitHubOAuth => "GitHubOAuth",
            Self::AppleOAuth => "AppleOAuth",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = WorkOsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(Provider::as_str).collect();
                WorkOsError::invalid_argument(format!(
                    "{} is not a valid value. `provider` must be in {}",
                    s,
                    valid.join(", ")
                ))
            })
    }
}
