//! Backend selection from configuration

use binder_config::DatabaseConfig;
use binder_interfaces::TemplateStore;
use std::sync::Arc;
use tracing::debug;

use crate::{InMemoryTemplateStore, SeaOrmTemplateStore};

/// Create an unopened template store for the configured URL
///
/// `memory://` selects [`InMemoryTemplateStore`]; every other URL is handed
/// to SeaORM.
pub fn create_template_store(config: &DatabaseConfig) -> Arc<dyn TemplateStore> {
    if config.is_memory_backend() {
        debug!("Using in-memory template store");
        Arc::new(InMemoryTemplateStore::new())
    } else {
        debug!("Using SeaORM template store");
        Arc::new(SeaOrmTemplateStore::new())
    }
}
