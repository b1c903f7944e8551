//! HTTP route binding
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | POST | `/templates` | register |
//! | GET | `/templates` | fetch all |
//! | GET | `/templates/{name}` | fetch one |
//! | GET | `/templates/{name}/status` | reserved, 501 |
//!
//! Module health is a separate router, [`health_routes`], so a host that
//! already serves `/health` can mount it elsewhere or not at all.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use binder_api_types::TemplateDocument;
use binder_config::MissingTemplateResponse;
use binder_interfaces::BinderModule;
use binder_web::{require_gate, AuthGate, WebError};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::module::TemplateRegistry;
use crate::outcome::RegistryOutcome;

#[derive(Clone)]
struct TemplatesContext {
    registry: Arc<TemplateRegistry>,
    missing_template: MissingTemplateResponse,
}

impl TemplatesContext {
    fn new(registry: Arc<TemplateRegistry>) -> Self {
        Self {
            missing_template: registry.http_binding().missing_template,
            registry,
        }
    }
}

/// Mount the gated `/templates` routes on `router`
pub fn template_routes(registry: Arc<TemplateRegistry>, router: Router, gate: Arc<dyn AuthGate>) -> Router {
    let templates = Router::new()
        .route("/templates", get(list_templates).post(register_template))
        .route("/templates/{name}", get(get_template))
        .route("/templates/{name}/status", get(get_template_status))
        .route_layer(middleware::from_fn_with_state(gate, require_gate))
        .with_state(TemplatesContext::new(registry));

    router.merge(templates)
}

/// Ungated `/health` route reporting module health
pub fn health_routes(registry: Arc<TemplateRegistry>) -> Router {
    Router::new()
        .route("/health", get(module_health))
        .with_state(TemplatesContext::new(registry))
}

fn render<T: Serialize>(outcome: RegistryOutcome<T>, missing: MissingTemplateResponse) -> Response {
    match outcome {
        RegistryOutcome::Success(value) => Json(value).into_response(),
        RegistryOutcome::DoesNotExist => match missing {
            MissingTemplateResponse::EmptyObject => Json(json!({})).into_response(),
            MissingTemplateResponse::NotFound => {
                WebError::not_found("template does not exist").into_response()
            }
        },
        RegistryOutcome::BadDatabase => WebError::internal("template store failure").into_response(),
        RegistryOutcome::NotStarted => {
            WebError::service_unavailable("registry module is not started").into_response()
        }
        RegistryOutcome::Invalid { reason } => WebError::bad_request(reason).into_response(),
    }
}

async fn register_template(State(ctx): State<TemplatesContext>, body: Bytes) -> Response {
    let document: TemplateDocument = match serde_json::from_slice(&body) {
        Ok(document) => document,
        Err(e) => {
            warn!("Rejected malformed template payload: {}", e);
            return render::<()>(
                RegistryOutcome::invalid(format!("malformed template payload: {}", e)),
                ctx.missing_template,
            );
        }
    };

    render(ctx.registry.register_template(document).await, ctx.missing_template)
}

async fn get_template(State(ctx): State<TemplatesContext>, Path(name): Path<String>) -> Response {
    render(ctx.registry.fetch_template(&name).await, ctx.missing_template)
}

async fn list_templates(State(ctx): State<TemplatesContext>) -> Response {
    render(ctx.registry.fetch_all_templates().await, ctx.missing_template)
}

async fn get_template_status(Path(name): Path<String>) -> WebError {
    WebError::not_implemented(format!("status of template '{}' is not available", name))
}

async fn module_health(State(ctx): State<TemplatesContext>) -> Response {
    let health = ctx.registry.health().await;
    let status = if health.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(health)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use binder_config::HttpBindingConfig;
    use binder_storage::testing::{mock_errors, MockTemplateStore};
    use binder_web::OpenGate;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    async fn app(store: MockTemplateStore, missing_template: MissingTemplateResponse) -> Router {
        let registry = TemplateRegistry::new("binder-registry", Arc::new(store))
            .with_http_binding(HttpBindingConfig { missing_template });
        registry.start(&Default::default()).await.unwrap();
        template_routes(Arc::new(registry), Router::new(), Arc::new(OpenGate))
    }

    async fn get_uri(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_missing_template_renders_as_configured() {
        let mut store = MockTemplateStore::lenient();
        store.expect_find_by_name().returning(|_| Ok(None));
        let empty = get_uri(app(store, MissingTemplateResponse::EmptyObject).await, "/templates/gone").await;
        assert_eq!(empty.status(), StatusCode::OK);

        let mut store = MockTemplateStore::lenient();
        store.expect_find_by_name().returning(|_| Ok(None));
        let not_found = get_uri(app(store, MissingTemplateResponse::NotFound).await, "/templates/gone").await;
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_store_failure_is_500() {
        let mut store = MockTemplateStore::lenient();
        store
            .expect_find_all()
            .returning(|| Err(mock_errors::query_failed()));
        let response = get_uri(app(store, Default::default()).await, "/templates").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let mut store = MockTemplateStore::lenient();
        store.expect_upsert().never();
        let response = app(store, Default::default())
            .await
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/templates")
                    .header("content-type", "application/json")
                    .body(Body::from("{\"name\": "))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_binds_onto_router_with_its_own_health() {
        let mut store = MockTemplateStore::lenient();
        store.expect_find_all().returning(|| Ok(Vec::new()));
        let registry = Arc::new(TemplateRegistry::new("binder-registry", Arc::new(store)));
        registry.start(&Default::default()).await.unwrap();

        let host = Router::new().route("/health", get(|| async { "host" }));
        let app = template_routes(registry, host, Arc::new(OpenGate));

        let response = get_uri(app.clone(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"host");

        let response = get_uri(app, "/templates").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_route_reports_state() {
        let registry = Arc::new(TemplateRegistry::new("binder-registry", Arc::new(MockTemplateStore::lenient())));

        let response = get_uri(health_routes(registry.clone()), "/health").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        registry.start(&Default::default()).await.unwrap();
        let response = get_uri(health_routes(registry), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_status_route_is_reserved() {
        let response = get_uri(
            app(MockTemplateStore::lenient(), Default::default()).await,
            "/templates/anything/status",
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }
}
