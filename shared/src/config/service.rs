//! Service identity and contract version configuration

use serde::{Deserialize, Serialize};

use crate::errors::ContractError;

/// Published snapshots of the wire contract.
///
/// - `V1`: per-user projects and `Subscription` tiers
/// - `V2`: per-project endpoints and glossaries
/// - `V3`: entity-scoped projects, dictionaries and `RateLimitStatus` (current)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractVersion {
    V1,
    V2,
    #[default]
    V3,
}

impl ContractVersion {
    /// The version new services should speak
    pub const CURRENT: ContractVersion = ContractVersion::V3;

    pub fn is_current(&self) -> bool {
        *self == Self::CURRENT
    }
}

impl std::fmt::Display for ContractVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractVersion::V1 => write!(f, "v1"),
            ContractVersion::V2 => write!(f, "v2"),
            ContractVersion::V3 => write!(f, "v3"),
        }
    }
}

impl std::str::FromStr for ContractVersion {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v1" | "1" => Ok(ContractVersion::V1),
            "v2" | "2" => Ok(ContractVersion::V2),
            "v3" | "3" => Ok(ContractVersion::V3),
            _ => Err(ContractError::InvalidContractVersion(s.to_string())),
        }
    }
}

/// Identity reported by the health endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name, e.g. `whisperly-api`
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Service version string
    #[serde(default = "default_service_version")]
    pub version: String,

    /// Contract snapshot the service speaks
    #[serde(default)]
    pub contract_version: ContractVersion,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            version: default_service_version(),
            contract_version: ContractVersion::default(),
        }
    }
}

impl ServiceConfig {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            contract_version: ContractVersion::default(),
        }
    }

    pub fn with_contract_version(mut self, version: ContractVersion) -> Self {
        self.contract_version = version;
        self
    }
}

fn default_service_name() -> String {
    String::from("whisperly-api")
}

fn default_service_version() -> String {
    String::from(env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_version_parsing() {
        assert_eq!("v1".parse::<ContractVersion>().unwrap(), ContractVersion::V1);
        assert_eq!("2".parse::<ContractVersion>().unwrap(), ContractVersion::V2);
        assert_eq!(" V3 ".parse::<ContractVersion>().unwrap(), ContractVersion::V3);
        assert!("v4".parse::<ContractVersion>().is_err());
    }

    #[test]
    fn test_current_version() {
        assert!(ContractVersion::default().is_current());
        assert!(ContractVersion::V1 < ContractVersion::CURRENT);
        assert_eq!(serde_json::to_string(&ContractVersion::V2).unwrap(), "\"v2\"");
    }

    #[test]
    fn test_service_config_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.name, "whisperly-api");
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));

        let parsed: ServiceConfig = serde_json::from_str(r#"{"name":"edge"}"#).unwrap();
        assert_eq!(parsed.name, "edge");
        assert_eq!(parsed.contract_version, ContractVersion::V3);
    }

    #[test]
    fn test_builder() {
        let config = ServiceConfig::new("whisperly-api", "1.0.0")
            .with_contract_version(ContractVersion::V2);
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.contract_version, ContractVersion::V2);
    }
}
