//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::query::SearchParams;
use serde::{Deserialize, Serialize};

/// Defaults applied when search input is missing or malformed
///
/// # Example
/// ```yaml
/// default_page: 1
/// default_per_page: 25
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Page used when the requested page is invalid
    pub default_page: usize,

    /// Page size used when the requested page size is invalid
    pub default_per_page: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page: SearchParams::DEFAULT_PAGE,
            default_per_page: SearchParams::DEFAULT_PER_PAGE,
        }
    }
}

impl SearchConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            file: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject defaults that would break the search invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page < 1 {
            return Err(ConfigError::Invalid {
                key: "default_page".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.default_per_page < 1 {
            return Err(ConfigError::Invalid {
                key: "default_per_page".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
