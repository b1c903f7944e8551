//! `serve`: run the registry behind an HTTP server

use anyhow::{Context, Result};
use axum::Router;
use binder_config::{ConfigLoader, RegistryConfig};
use binder_interfaces::BinderModule;
use binder_registry::{ModuleBindings, TemplateRegistry};
use binder_web::{auth_gate_from_config, cors_layer, request_id_middleware, trace_layer};
use std::path::Path;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

/// Load configuration and apply command-line overrides
pub fn resolve_config(
    config_path: Option<&Path>,
    port: Option<u16>,
    database_url: Option<String>,
) -> Result<RegistryConfig> {
    let mut config = ConfigLoader::new()
        .load(config_path)
        .context("Failed to load configuration")?;

    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(url) = database_url {
        config.database.url = url;
    }

    config
        .validate_all()
        .context("Invalid configuration after applying command-line overrides")?;
    Ok(config)
}

/// Compose the module routes with the host middleware stack
pub fn build_app(registry: Arc<TemplateRegistry>, config: &RegistryConfig) -> Router {
    registry
        .clone()
        .bind_routes(Router::new(), auth_gate_from_config(&config.auth))
        .merge(registry.bind_health())
        .layer(trace_layer())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(cors_layer())
}

pub async fn serve_command(config: RegistryConfig) -> Result<()> {
    info!(component = %config.name, "Starting template registry");

    let registry = Arc::new(TemplateRegistry::from_config(&config));
    registry
        .start(&config)
        .await
        .context("Failed to start template registry")?;

    let app = build_app(registry.clone(), &config);

    let addr = config.server.socket_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Registry listening on: {}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // Stop the module even when the server failed
    let stopped = registry.stop().await;

    match served {
        Ok(()) => info!("Server stopped gracefully"),
        Err(e) => {
            error!("Server error: {}", e);
            return Err(e).context("HTTP server failed");
        }
    }
    stopped.context("Failed to stop template registry")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_overrides_replace_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  port: 7000\ndatabase:\n  url: \"sqlite://registry.db\"").unwrap();

        let config = resolve_config(Some(file.path()), Some(7100), Some("memory://".to_string())).unwrap();
        assert_eq!(config.server.port, 7100);
        assert_eq!(config.database.url, "memory://");
    }

    #[tokio::test]
    async fn test_app_serves_health_and_gated_templates() {
        use axum::{body::Body, http::{Request, StatusCode}};
        use binder_config::{AuthConfig, DatabaseConfig};
        use tower::ServiceExt;

        let config = RegistryConfig {
            database: DatabaseConfig {
                url: "memory://".to_string(),
                ..DatabaseConfig::default()
            },
            auth: AuthConfig {
                require_auth: true,
                api_key: Some("serve-key".to_string()),
            },
            ..RegistryConfig::default()
        };
        let registry = Arc::new(TemplateRegistry::from_config(&config));
        registry.start(&config).await.unwrap();
        let app = build_app(registry, &config);

        let health = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);

        let denied = app
            .oneshot(Request::builder().uri("/templates").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let result = resolve_config(None, None, Some("ftp://nowhere".to_string()));
        assert!(result.is_err());
    }
}
