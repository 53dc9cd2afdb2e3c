//! WorkOS Core Components
//!
//! Transport infrastructure shared by every service.

pub mod transport;

pub use transport::*;
