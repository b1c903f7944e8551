//! # Binder Web Utilities
//!
//! Host-side HTTP plumbing for the registry: the auth gate every module route
//! passes through, request-id tracing, CORS and a JSON error type.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum::{Router, routing::get};
//! use binder_web::{ApiKeyGate, AuthGate, middleware::{cors_layer, request_id_middleware, require_gate}};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let gate: Arc<dyn AuthGate> = Arc::new(ApiKeyGate::new("s3cret"));
//! let app: Router = Router::new()
//!     .route("/ping", get(|| async { "pong" }))
//!     .route_layer(axum::middleware::from_fn_with_state(gate, require_gate))
//!     .layer(axum::middleware::from_fn(request_id_middleware))
//!     .layer(cors_layer());
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8082").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```

pub mod errors;
pub mod middleware;

pub use errors::WebError;
pub use middleware::{
    auth_gate_from_config, cors_layer, generate_api_key, request_id_middleware, require_gate, trace_layer,
    ApiKeyGate, AuthContext, AuthGate, OpenGate, RequestId, REQUEST_ID_HEADER,
};
