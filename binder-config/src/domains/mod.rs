//! Domain-specific configuration modules

pub mod auth;
pub mod database;
pub mod http;
pub mod logging;
pub mod server;
pub mod utils;

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Main registry configuration combining all domains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Logical component name used for logging and namespacing
    #[serde(default = "default_component_name")]
    pub name: String,

    /// HTTP server configuration
    #[serde(default)]
    pub server: server::ServerConfig,

    /// Template store configuration
    #[serde(default)]
    pub database: database::DatabaseConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: auth::AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: logging::LoggingConfig,

    /// HTTP binding behaviour
    #[serde(default)]
    pub http: http::HttpBindingConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            name: default_component_name(),
            server: server::ServerConfig::default(),
            database: database::DatabaseConfig::default(),
            auth: auth::AuthConfig::default(),
            logging: logging::LoggingConfig::default(),
            http: http::HttpBindingConfig::default(),
        }
    }
}

impl RegistryConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        validate_required_string(&self.name, "name", "registry")?;
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;
        self.http.validate()?;
        Ok(())
    }

    /// Generate a sample configuration file
    pub fn generate_sample_yaml() -> ConfigResult<String> {
        let sample = Self {
            auth: auth::AuthConfig {
                require_auth: true,
                api_key: Some("change-me".to_string()),
            },
            ..Default::default()
        };
        Ok(serde_yaml::to_string(&sample)?)
    }
}

fn default_component_name() -> String {
    "binder-registry".to_string()
}
