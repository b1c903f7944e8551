//! Transport bindings over [`TemplateRegistry`]
//!
//! Both bindings render the same [`RegistryOutcome`](crate::RegistryOutcome)
//! into their own wire format.

pub mod api;
pub mod http;

use axum::Router;
use binder_web::AuthGate;
use std::sync::Arc;

use crate::module::TemplateRegistry;

pub use api::{ApiHandlers, ApiReply, ApiRequest, ApiResponder, DispatchError, HANDLER_NAMES};

/// Transport surfaces a hosted module hands to its host
pub trait ModuleBindings {
    /// Mount the module's HTTP routes behind `gate`
    fn bind_routes(self: Arc<Self>, router: Router, gate: Arc<dyn AuthGate>) -> Router;

    /// Ungated health router, for hosts that expose per-module health
    fn bind_health(self: Arc<Self>) -> Router;

    /// Named handler table for in-process dispatch
    fn bind_api(self: Arc<Self>) -> ApiHandlers;
}

impl ModuleBindings for TemplateRegistry {
    fn bind_routes(self: Arc<Self>, router: Router, gate: Arc<dyn AuthGate>) -> Router {
        http::template_routes(self, router, gate)
    }

    fn bind_health(self: Arc<Self>) -> Router {
        http::health_routes(self)
    }

    fn bind_api(self: Arc<Self>) -> ApiHandlers {
        ApiHandlers::new(self)
    }
}
