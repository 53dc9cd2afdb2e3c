//! Admin Portal intent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow opened by a generated Admin Portal link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Configure an SSO connection.
    Sso,
    /// Configure a directory sync.
    Dsync,
}

impl Intent {
    pub const ALL: [Intent; 2] = [Self::Sso, Self::Dsync];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sso => "sso",
            Self::Dsync => "dsync",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
