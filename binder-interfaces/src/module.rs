//! Module lifecycle interface
//!
//! A module is a component hosted inside a Binder process. The host calls
//! `start` once the process is ready and `stop` on shutdown; the supported
//! sequence is start, stop, start again.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::StoreError;

/// Lifecycle state of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleState {
    Stopped,
    Started,
}

impl fmt::Display for ModuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleState::Stopped => f.write_str("stopped"),
            ModuleState::Started => f.write_str("started"),
        }
    }
}

/// Errors raised by module start/stop
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    /// The backing store could not be opened or closed
    #[error("Connection error in module '{module}': {source}")]
    Connection {
        module: String,
        #[source]
        source: StoreError,
    },
}

/// Base lifecycle contract for hosted modules
#[async_trait]
pub trait BinderModule: Send + Sync {
    type Config: Send + Sync;

    /// Logical component name for logging and namespacing
    fn name(&self) -> &str;

    /// Current lifecycle state
    fn state(&self) -> ModuleState;

    /// Acquire resources and begin serving; returns once fully ready
    async fn start(&self, config: &Self::Config) -> Result<(), ModuleError>;

    /// Release resources; safe to call when not started
    async fn stop(&self) -> Result<(), ModuleError>;

    /// Report module health
    async fn health(&self) -> ModuleHealth;
}

/// Module health status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthStatus {
    /// Module is operating normally
    Healthy,
    /// Module is not functioning properly
    Unhealthy { reason: String },
}

/// Module health information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleHealth {
    pub module: String,
    pub state: ModuleState,
    #[serde(flatten)]
    pub status: HealthStatus,
    pub last_checked: DateTime<Utc>,
}

impl ModuleHealth {
    /// Create a healthy status
    pub fn healthy(module: impl Into<String>, state: ModuleState) -> Self {
        Self {
            module: module.into(),
            state,
            status: HealthStatus::Healthy,
            last_checked: Utc::now(),
        }
    }

    /// Create an unhealthy status
    pub fn unhealthy(module: impl Into<String>, state: ModuleState, reason: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            state,
            status: HealthStatus::Unhealthy {
                reason: reason.into(),
            },
            last_checked: Utc::now(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self.status, HealthStatus::Healthy)
    }
}
