//! Health check payload

use serde::{Deserialize, Serialize};
use std::fmt;
use wl_shared::ServiceConfig;

/// Conventional values for [`HealthCheckData::status`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Degraded => "degraded",
            HealthStatus::Unhealthy => "unhealthy",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data returned by the health endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckData {
    /// e.g. `whisperly-api`
    pub name: String,
    /// e.g. `1.0.0`
    pub version: String,
    /// Free-form; see [`HealthStatus`] for the usual values
    pub status: String,
}

impl HealthCheckData {
    pub fn from_config(config: &ServiceConfig, status: HealthStatus) -> Self {
        Self {
            name: config.name.clone(),
            version: config.version.clone(),
            status: status.to_string(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy.as_str()
    }
}
