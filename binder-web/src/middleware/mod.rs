pub mod auth;
pub mod cors;
pub mod request_id;
pub mod trace;

pub use auth::{auth_gate_from_config, generate_api_key, require_gate, ApiKeyGate, AuthContext, AuthGate, OpenGate};
pub use cors::{cors_layer, cors_layer_with_config, CorsConfig};
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use trace::trace_layer;
