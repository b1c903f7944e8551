//! Authentication configuration for the HTTP binding

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Authentication configuration
///
/// When `require_auth` is set and `api_key` is absent the host generates a
/// key at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Whether requests must present an API key
    #[serde(default = "crate::domains::utils::default_true")]
    pub require_auth: bool,

    /// Shared API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            require_auth: true,
            api_key: None,
        }
    }
}

impl Validatable for AuthConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(ref key) = self.api_key {
            if key.trim().is_empty() {
                return Err(self.validation_error("api_key cannot be blank when set"));
            }
            if key.chars().any(char::is_whitespace) {
                return Err(self.validation_error("api_key cannot contain whitespace"));
            }
        }
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "auth"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_api_key_rejected() {
        let config = AuthConfig {
            require_auth: true,
            api_key: Some(" ".to_string()),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_with_space_rejected() {
        let config = AuthConfig {
            require_auth: true,
            api_key: Some("two words".to_string()),
        };
        assert!(config.validate().is_err());
    }
}
