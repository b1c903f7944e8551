//! Host-dispatched API binding
//!
//! A composite host embeds the registry without network framing: it looks up
//! a handler by name and invokes it with an [`ApiRequest`] and an
//! [`ApiResponder`]. Exactly one responder callback fires per dispatch.

use binder_api_types::TemplateDocument;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::module::TemplateRegistry;
use crate::outcome::RegistryOutcome;

/// Handler names exposed by [`ApiHandlers`]
pub const HANDLER_NAMES: [&str; 3] = ["register", "fetch", "fetchAll"];

/// Dispatch failure, raised before any responder callback
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Unknown API handler: {0}")]
    UnknownHandler(String),
}

/// Request handed to an API handler
#[derive(Debug, Clone, Default)]
pub struct ApiRequest {
    pub params: Map<String, Value>,
}

impl ApiRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.params.insert(key.into(), value);
        self
    }
}

/// Response callbacks supplied by the host
pub trait ApiResponder: Send {
    fn success(&mut self, data: Value);
    fn bad_database(&mut self);
    fn does_not_exist(&mut self);
    fn not_started(&mut self);
    fn invalid(&mut self, reason: &str);
}

/// Responder that records the callback it received
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ApiReply {
    #[default]
    Pending,
    Success(Value),
    BadDatabase,
    DoesNotExist,
    NotStarted,
    Invalid(String),
}

impl ApiResponder for ApiReply {
    fn success(&mut self, data: Value) {
        *self = ApiReply::Success(data);
    }

    fn bad_database(&mut self) {
        *self = ApiReply::BadDatabase;
    }

    fn does_not_exist(&mut self) {
        *self = ApiReply::DoesNotExist;
    }

    fn not_started(&mut self) {
        *self = ApiReply::NotStarted;
    }

    fn invalid(&mut self, reason: &str) {
        *self = ApiReply::Invalid(reason.to_string());
    }
}

/// Named handler table over a registry
#[derive(Clone)]
pub struct ApiHandlers {
    registry: Arc<TemplateRegistry>,
}

impl ApiHandlers {
    pub fn new(registry: Arc<TemplateRegistry>) -> Self {
        Self { registry }
    }

    pub fn names(&self) -> &'static [&'static str] {
        &HANDLER_NAMES
    }

    /// Invoke the handler called `handler`
    pub async fn dispatch(
        &self,
        handler: &str,
        request: ApiRequest,
        responder: &mut dyn ApiResponder,
    ) -> Result<(), DispatchError> {
        debug!(handler, "Dispatching API request");
        match handler {
            "register" => self.register(request, responder).await,
            "fetch" => self.fetch(request, responder).await,
            "fetchAll" => self.fetch_all(responder).await,
            other => return Err(DispatchError::UnknownHandler(other.to_string())),
        }
        Ok(())
    }

    async fn register(&self, mut request: ApiRequest, responder: &mut dyn ApiResponder) {
        let document = match request.params.remove("template") {
            Some(value) => serde_json::from_value::<TemplateDocument>(value),
            None => {
                warn!("register called without a template parameter");
                return responder.invalid("missing 'template' parameter");
            }
        };

        match document {
            Ok(document) => deliver(self.registry.register_template(document).await, responder),
            Err(e) => {
                warn!("Rejected malformed template parameter: {}", e);
                responder.invalid(&format!("malformed template: {}", e));
            }
        }
    }

    async fn fetch(&self, request: ApiRequest, responder: &mut dyn ApiResponder) {
        match request.params.get("template-name").and_then(Value::as_str) {
            Some(name) => deliver(self.registry.fetch_template(name).await, responder),
            None => responder.invalid("missing 'template-name' parameter"),
        }
    }

    async fn fetch_all(&self, responder: &mut dyn ApiResponder) {
        deliver(self.registry.fetch_all_templates().await, responder)
    }
}

fn deliver<T: Serialize>(outcome: RegistryOutcome<T>, responder: &mut dyn ApiResponder) {
    match outcome {
        RegistryOutcome::Success(data) => match serde_json::to_value(data) {
            Ok(value) => responder.success(value),
            Err(e) => {
                error!("Failed to serialize API response: {}", e);
                responder.bad_database();
            }
        },
        RegistryOutcome::BadDatabase => responder.bad_database(),
        RegistryOutcome::DoesNotExist => responder.does_not_exist(),
        RegistryOutcome::NotStarted => responder.not_started(),
        RegistryOutcome::Invalid { reason } => responder.invalid(&reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binder_interfaces::BinderModule;
    use binder_storage::testing::{mock_errors, MockTemplateStore};
    use serde_json::json;

    async fn handlers(store: MockTemplateStore) -> ApiHandlers {
        let registry = TemplateRegistry::new("binder-registry", Arc::new(store));
        registry.start(&Default::default()).await.unwrap();
        ApiHandlers::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn test_unknown_handler() {
        let api = handlers(MockTemplateStore::lenient()).await;
        let mut reply = ApiReply::default();

        let err = api
            .dispatch("delete", ApiRequest::new(), &mut reply)
            .await
            .unwrap_err();
        assert_eq!(err, DispatchError::UnknownHandler("delete".to_string()));
        assert_eq!(reply, ApiReply::Pending);
    }

    #[tokio::test]
    async fn test_missing_params_are_invalid() {
        let mut store = MockTemplateStore::lenient();
        store.expect_upsert().never();
        store.expect_find_by_name().never();
        let api = handlers(store).await;

        let mut reply = ApiReply::default();
        api.dispatch("register", ApiRequest::new(), &mut reply).await.unwrap();
        assert!(matches!(reply, ApiReply::Invalid(_)));

        let mut reply = ApiReply::default();
        let request = ApiRequest::new().with_param("template-name", json!(42));
        api.dispatch("fetch", request, &mut reply).await.unwrap();
        assert!(matches!(reply, ApiReply::Invalid(_)));

        let mut reply = ApiReply::default();
        let request = ApiRequest::new().with_param("template", json!({ "services": "spark" }));
        api.dispatch("register", request, &mut reply).await.unwrap();
        assert!(matches!(reply, ApiReply::Invalid(_)));
    }

    #[tokio::test]
    async fn test_store_failure_is_bad_database() {
        let mut store = MockTemplateStore::lenient();
        store
            .expect_find_all()
            .returning(|| Err(mock_errors::query_failed()));
        let api = handlers(store).await;

        let mut reply = ApiReply::default();
        api.dispatch("fetchAll", ApiRequest::new(), &mut reply).await.unwrap();
        assert_eq!(reply, ApiReply::BadDatabase);
    }

    #[tokio::test]
    async fn test_not_started_callback() {
        let registry = TemplateRegistry::new("binder-registry", Arc::new(MockTemplateStore::new()));
        let api = ApiHandlers::new(Arc::new(registry));

        let mut reply = ApiReply::default();
        api.dispatch("fetchAll", ApiRequest::new(), &mut reply).await.unwrap();
        assert_eq!(reply, ApiReply::NotStarted);
    }

    #[test]
    fn test_handler_names() {
        assert_eq!(HANDLER_NAMES, ["register", "fetch", "fetchAll"]);
    }
}
