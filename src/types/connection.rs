//! Connection Types

use serde::{Deserialize, Serialize};

/// An SSO connection.
///
/// Only built by decoding an API response; fields the API adds beyond these
/// are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Connection {
    /// Connection identifier (`conn_...`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Identity provider type, e.g. `OktaSAML`.
    pub connection_type: String,
    /// Domains routed to this connection, in API order.
    pub domains: Vec<ConnectionDomain>,
}

/// A domain attached to a connection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ConnectionDomain {
    pub id: String,
    pub domain: String,
}
