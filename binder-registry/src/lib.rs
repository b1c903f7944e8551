//! # Binder Registry
//!
//! The template registry module: stores and serves named container build
//! recipes on top of a [`TemplateStore`](binder_interfaces::TemplateStore).
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum::Router;
//! use binder_config::RegistryConfig;
//! use binder_interfaces::BinderModule;
//! use binder_registry::{ModuleBindings, TemplateRegistry};
//! use binder_web::OpenGate;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RegistryConfig::default();
//! let registry = Arc::new(TemplateRegistry::from_config(&config));
//! registry.start(&config).await?;
//!
//! let app = registry
//!     .clone()
//!     .bind_routes(Router::new(), Arc::new(OpenGate))
//!     .merge(registry.clone().bind_health());
//! let api = registry.bind_api();
//! # let _ = (app, api);
//! # Ok(())
//! # }
//! ```

pub mod bindings;
pub mod module;
pub mod outcome;

pub use bindings::{
    ApiHandlers, ApiReply, ApiRequest, ApiResponder, DispatchError, ModuleBindings, HANDLER_NAMES,
};
pub use module::TemplateRegistry;
pub use outcome::RegistryOutcome;
