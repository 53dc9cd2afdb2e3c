//! WorkOS Types
//!
//! Value objects decoded from API responses, and the closed string sets used
//! to validate inputs.

pub mod connection;
pub mod intent;
pub mod list;
pub mod organization;
pub mod profile;
pub mod provider;

pub use connection::*;
pub use intent::*;
pub use list::*;
pub use organization::*;
pub use profile::*;
pub use provider::*;
