//! In-memory template store
//!
//! Records live in a map guarded by a single lock, so upserts for the same
//! name serialize on the write lock. Records survive `close`/`open` cycles
//! for the lifetime of the value.

use async_trait::async_trait;
use binder_api_types::{Template, TemplateDocument};
use binder_config::DatabaseConfig;
use binder_interfaces::{StoreError, TemplateStore};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
struct MemoryState {
    open: bool,
    records: HashMap<String, Template>,
}

/// Process-local template store
#[derive(Default)]
pub struct InMemoryTemplateStore {
    state: RwLock<MemoryState>,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, regardless of open state
    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TemplateStore for InMemoryTemplateStore {
    async fn open(&self, _config: &DatabaseConfig) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.open = true;
        debug!(records = state.records.len(), "In-memory template store opened");
        Ok(())
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.state.write().await.open = false;
        Ok(())
    }

    async fn upsert(&self, name: &str, document: TemplateDocument) -> Result<Template, StoreError> {
        let mut state = self.state.write().await;
        if !state.open {
            return Err(StoreError::NotOpen);
        }

        let now = Utc::now();
        let time_created = state
            .records
            .get(name)
            .map(|existing| existing.time_created)
            .unwrap_or(now);

        let template = Template::from_document(name, document, time_created, now);
        state.records.insert(name.to_string(), template.clone());
        Ok(template)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Template>, StoreError> {
        let state = self.state.read().await;
        if !state.open {
            return Err(StoreError::NotOpen);
        }
        Ok(state.records.get(name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Template>, StoreError> {
        let state = self.state.read().await;
        if !state.open {
            return Err(StoreError::NotOpen);
        }
        Ok(state.records.values().cloned().collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        if self.state.read().await.open {
            Ok(())
        } else {
            Err(StoreError::NotOpen)
        }
    }
}
