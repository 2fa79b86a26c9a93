//! Configuration module
//!
//! - `service` - Service identity and contract version
//!
//! Configuration is plain serde data with defaults; the host service decides
//! where it comes from.

pub mod service;

// Re-export commonly used types
pub use service::{ContractVersion, ServiceConfig};
