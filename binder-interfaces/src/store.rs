//! Template store interface
//!
//! A store persists a single collection of template records keyed uniquely
//! by name. Backends own their connection and expose it through an explicit
//! `open`/`close` lifecycle driven by the registry module.

use async_trait::async_trait;
use binder_api_types::{Template, TemplateDocument};
use binder_config::DatabaseConfig;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing connection could not be opened or closed
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// An operation was attempted without an open connection
    #[error("Store is not open")]
    NotOpen,

    /// A query against the backing store failed
    #[error("Query error: {message}")]
    Query { message: String },

    /// A stored record could not be converted to or from a template
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl StoreError {
    pub fn connection(message: impl Into<String>) -> Self {
        StoreError::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        StoreError::Query {
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        StoreError::Serialization {
            message: message.into(),
        }
    }

    /// Whether this error concerns the connection lifecycle
    pub fn is_connection(&self) -> bool {
        matches!(self, StoreError::Connection { .. } | StoreError::NotOpen)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::serialization(err.to_string())
    }
}

/// Name-keyed template persistence
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Open the backing connection; must precede every other operation
    async fn open(&self, config: &DatabaseConfig) -> Result<(), StoreError>;

    /// Release the connection; a no-op when nothing is open
    async fn close(&self) -> Result<(), StoreError>;

    /// Insert or fully replace the record stored under `name`
    ///
    /// `time-created` is kept from the existing record, `time-modified` is
    /// always refreshed. Must not create a second record for `name` under
    /// concurrent writers.
    async fn upsert(&self, name: &str, document: TemplateDocument) -> Result<Template, StoreError>;

    /// Find a template by name
    async fn find_by_name(&self, name: &str) -> Result<Option<Template>, StoreError>;

    /// Every stored template, in no particular order
    async fn find_all(&self) -> Result<Vec<Template>, StoreError>;

    /// Check that the store can serve requests
    async fn health_check(&self) -> Result<(), StoreError>;
}
