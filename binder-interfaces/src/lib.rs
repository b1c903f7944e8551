//! # Binder Interfaces
//!
//! Contracts shared between the registry module, its store backends and the
//! host process.
//!
//! ## Main Interfaces
//!
//! - [`TemplateStore`] - name-keyed persistence for template records
//! - [`BinderModule`] - start/stop lifecycle of a hosted component

pub mod module;
pub mod store;

// Re-export commonly used types
pub use module::{BinderModule, HealthStatus, ModuleError, ModuleHealth, ModuleState};
pub use store::{StoreError, TemplateStore};
