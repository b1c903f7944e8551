//! The template registry module
//!
//! [`TemplateRegistry`] owns a [`TemplateStore`] and exposes the three
//! registry operations on top of it. Operations are refused with
//! [`RegistryOutcome::NotStarted`] until `start` has opened the store.

use async_trait::async_trait;
use binder_api_types::{Template, TemplateDocument, TemplateReceipt};
use binder_config::{HttpBindingConfig, RegistryConfig};
use binder_interfaces::{BinderModule, ModuleError, ModuleHealth, ModuleState, TemplateStore};
use binder_storage::create_template_store;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, instrument, warn};

use crate::outcome::RegistryOutcome;

/// Template registry module
pub struct TemplateRegistry {
    name: String,
    store: Arc<dyn TemplateStore>,
    http: HttpBindingConfig,
    state: watch::Sender<ModuleState>,
    lifecycle: Mutex<()>,
}

impl TemplateRegistry {
    /// Create a stopped registry over `store`
    pub fn new(name: impl Into<String>, store: Arc<dyn TemplateStore>) -> Self {
        let (state, _) = watch::channel(ModuleState::Stopped);
        Self {
            name: name.into(),
            store,
            http: HttpBindingConfig::default(),
            state,
            lifecycle: Mutex::new(()),
        }
    }

    /// Create a stopped registry with the store backend the config selects
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new(config.name.clone(), create_template_store(&config.database))
            .with_http_binding(config.http.clone())
    }

    pub fn with_http_binding(mut self, http: HttpBindingConfig) -> Self {
        self.http = http;
        self
    }

    pub fn http_binding(&self) -> &HttpBindingConfig {
        &self.http
    }

    /// Watch lifecycle transitions
    pub fn subscribe(&self) -> watch::Receiver<ModuleState> {
        self.state.subscribe()
    }

    fn is_started(&self) -> bool {
        *self.state.borrow() == ModuleState::Started
    }

    /// Store or replace a template
    ///
    /// Only the name and timestamps are returned, never the document.
    #[instrument(skip_all, fields(component = %self.name))]
    pub async fn register_template(&self, document: TemplateDocument) -> RegistryOutcome<TemplateReceipt> {
        if !self.is_started() {
            return RegistryOutcome::NotStarted;
        }

        let name = match document.template_name() {
            Some(name) => name.to_string(),
            None => {
                warn!("Rejected template without a name");
                return RegistryOutcome::invalid("template name is required");
            }
        };

        debug!(template = %name, "Registering template");
        RegistryOutcome::from(self.store.upsert(&name, document).await).map(|stored| {
            info!(template = %stored.name, "Template registered");
            stored.receipt()
        })
    }

    /// Fetch one template by name
    #[instrument(skip_all, fields(component = %self.name, template = %name))]
    pub async fn fetch_template(&self, name: &str) -> RegistryOutcome<Template> {
        if !self.is_started() {
            return RegistryOutcome::NotStarted;
        }

        match self.store.find_by_name(name).await {
            Ok(Some(template)) => RegistryOutcome::Success(template),
            Ok(None) => {
                debug!("Template does not exist");
                RegistryOutcome::DoesNotExist
            }
            Err(err) => RegistryOutcome::from_store_error(err),
        }
    }

    /// Fetch every stored template
    #[instrument(skip_all, fields(component = %self.name))]
    pub async fn fetch_all_templates(&self) -> RegistryOutcome<Vec<Template>> {
        if !self.is_started() {
            return RegistryOutcome::NotStarted;
        }

        let outcome = RegistryOutcome::from(self.store.find_all().await);
        if let RegistryOutcome::Success(templates) = &outcome {
            debug!(count = templates.len(), "Fetched all templates");
        }
        outcome
    }
}

#[async_trait]
impl BinderModule for TemplateRegistry {
    type Config = RegistryConfig;

    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> ModuleState {
        *self.state.borrow()
    }

    #[instrument(skip_all, fields(component = %self.name))]
    async fn start(&self, config: &RegistryConfig) -> Result<(), ModuleError> {
        let _lifecycle = self.lifecycle.lock().await;
        if self.is_started() {
            debug!("Module already started");
            return Ok(());
        }

        self.store
            .open(&config.database)
            .await
            .map_err(|source| ModuleError::Connection {
                module: self.name.clone(),
                source,
            })?;

        self.state.send_replace(ModuleState::Started);
        info!("Template registry started");
        Ok(())
    }

    #[instrument(skip_all, fields(component = %self.name))]
    async fn stop(&self) -> Result<(), ModuleError> {
        let _lifecycle = self.lifecycle.lock().await;
        if !self.is_started() {
            debug!("Module not started, nothing to stop");
            return Ok(());
        }

        // New requests see NotStarted while the store closes
        self.state.send_replace(ModuleState::Stopped);

        self.store.close().await.map_err(|source| ModuleError::Connection {
            module: self.name.clone(),
            source,
        })?;

        info!("Template registry stopped");
        Ok(())
    }

    async fn health(&self) -> ModuleHealth {
        let state = self.state();
        if state != ModuleState::Started {
            return ModuleHealth::unhealthy(&self.name, state, "module not started");
        }

        match self.store.health_check().await {
            Ok(()) => ModuleHealth::healthy(&self.name, state),
            Err(err) => ModuleHealth::unhealthy(&self.name, state, err.to_string()),
        }
    }
}
