//! API key authentication gate
//!
//! Module routes are bound behind an [`AuthGate`] supplied by the host. The
//! key may arrive as the bare `Authorization` value, as
//! `Authorization: ApiKey <key>`, or in `X-API-Key`.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use binder_config::AuthConfig;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::WebError;

/// Header carrying the key when `Authorization` is taken
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Authentication context for the current request
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Who the request was admitted as
    pub principal: String,
    /// Whether a credential was checked
    pub is_authenticated: bool,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self {
            principal: "anonymous".to_string(),
            is_authenticated: false,
        }
    }
}

impl AuthContext {
    pub fn api_key() -> Self {
        Self {
            principal: "api-key".to_string(),
            is_authenticated: true,
        }
    }
}

/// Host-supplied request admission policy
pub trait AuthGate: Send + Sync {
    fn authorize(&self, headers: &HeaderMap) -> Result<AuthContext, WebError>;
}

/// Admits every request as anonymous
#[derive(Debug, Clone, Default)]
pub struct OpenGate;

impl AuthGate for OpenGate {
    fn authorize(&self, _headers: &HeaderMap) -> Result<AuthContext, WebError> {
        Ok(AuthContext::default())
    }
}

/// Admits requests presenting a single shared key
#[derive(Clone)]
pub struct ApiKeyGate {
    key_digest: [u8; 32],
}

impl ApiKeyGate {
    pub fn new(api_key: impl AsRef<str>) -> Self {
        Self {
            key_digest: Sha256::digest(api_key.as_ref().as_bytes()).into(),
        }
    }

    fn matches(&self, candidate: &str) -> bool {
        let digest: [u8; 32] = Sha256::digest(candidate.as_bytes()).into();
        digest == self.key_digest
    }
}

impl std::fmt::Debug for ApiKeyGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyGate").finish_non_exhaustive()
    }
}

impl AuthGate for ApiKeyGate {
    fn authorize(&self, headers: &HeaderMap) -> Result<AuthContext, WebError> {
        let candidate = extract_api_key(headers)
            .ok_or_else(|| WebError::unauthorized("Missing API key"))?;

        if self.matches(candidate) {
            Ok(AuthContext::api_key())
        } else {
            Err(WebError::unauthorized("Invalid API key"))
        }
    }
}

/// Extract the presented key from request headers
pub fn extract_api_key(headers: &HeaderMap) -> Option<&str> {
    if let Some(value) = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) {
        let value = value.trim_start();
        let key = match value.strip_prefix("ApiKey") {
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
            _ => value.trim_end(),
        };
        if !key.is_empty() {
            return Some(key);
        }
    }

    headers
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|key| !key.is_empty())
}

/// Generate a fresh random API key
pub fn generate_api_key() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Build the gate described by the auth configuration
///
/// When auth is required but no key is configured a key is generated and
/// logged, so the operator can hand it to clients.
pub fn auth_gate_from_config(config: &AuthConfig) -> Arc<dyn AuthGate> {
    if !config.require_auth {
        warn!("Authentication disabled, all template routes are open");
        return Arc::new(OpenGate);
    }

    match &config.api_key {
        Some(key) => Arc::new(ApiKeyGate::new(key)),
        None => {
            let key = generate_api_key();
            warn!(api_key = %key, "No API key configured, generated one for this process");
            Arc::new(ApiKeyGate::new(key))
        }
    }
}

/// Middleware rejecting requests the gate does not admit
pub async fn require_gate(
    State(gate): State<Arc<dyn AuthGate>>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let context = gate.authorize(request.headers()).inspect_err(|e| {
        debug!("Request rejected by auth gate: {}", e);
    })?;

    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}

/// Auth context extractor for handlers behind [`require_gate`]
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| WebError::internal("Auth context not found, is the auth gate installed?"))
    }
}
