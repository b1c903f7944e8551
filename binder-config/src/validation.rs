//! Configuration validation traits and utilities

use crate::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration
pub trait Validatable {
    /// Validate the configuration
    fn validate(&self) -> ConfigResult<()>;

    /// Get the domain name for error reporting
    fn domain_name(&self) -> &'static str;

    /// Helper to create a domain-specific validation error
    fn validation_error(&self, message: impl Into<String>) -> ConfigError {
        ConfigError::DomainError {
            domain: self.domain_name().to_string(),
            message: message.into(),
        }
    }
}

/// Validate a required string field
pub fn validate_required_string(value: &str, field_name: &str, domain: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} cannot be empty", field_name),
        });
    }
    Ok(())
}

/// Validate a positive number
pub fn validate_positive<T>(value: T, field_name: &str, domain: &str) -> ConfigResult<()>
where
    T: PartialOrd + Default + std::fmt::Display,
{
    if value <= T::default() {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} must be greater than 0, got {}", field_name, value),
        });
    }
    Ok(())
}

/// Validate a database URL and restrict it to the supported schemes
pub fn validate_database_url(url: &str, field_name: &str, domain: &str) -> ConfigResult<()> {
    validate_required_string(url, field_name, domain)?;

    let parsed = url::Url::parse(url).map_err(|e| ConfigError::DomainError {
        domain: domain.to_string(),
        message: format!("{} has invalid URL format: {}", field_name, e),
    })?;

    match parsed.scheme() {
        "sqlite" | "postgres" | "postgresql" | "mysql" | "memory" => Ok(()),
        scheme => Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} scheme '{}' is not supported", field_name, scheme),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert!(validate_required_string("binder", "name", "test").is_ok());
        assert!(validate_required_string("", "name", "test").is_err());
        assert!(validate_required_string("  ", "name", "test").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(1u32, "count", "test").is_ok());
        assert!(validate_positive(0u32, "count", "test").is_err());
    }

    #[test]
    fn test_validate_database_url() {
        assert!(validate_database_url("sqlite::memory:", "url", "database").is_ok());
        assert!(validate_database_url("sqlite://binder-registry.db", "url", "database").is_ok());
        assert!(validate_database_url("memory://", "url", "database").is_ok());
        assert!(validate_database_url("postgres://user@localhost/binder", "url", "database").is_ok());

        let err = validate_database_url("ftp://example.com/db", "url", "database").unwrap_err();
        assert!(err.to_string().contains("not supported"));
        assert!(validate_database_url("not a url", "url", "database").is_err());
    }
}
