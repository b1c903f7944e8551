//! Domain-driven configuration management for the Binder registry
//!
//! Configuration is split by functional domain (server, database, auth,
//! logging, HTTP binding), each with validation, defaults and environment
//! variable overrides.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use validation::Validatable;

// Re-export domain configurations
pub use domains::{
    auth::AuthConfig,
    database::DatabaseConfig,
    http::{HttpBindingConfig, MissingTemplateResponse},
    logging::{LogFormat, LogLevel, LoggingConfig},
    server::ServerConfig,
    RegistryConfig,
};

// Re-export utilities
pub use domains::utils::serde_duration;
