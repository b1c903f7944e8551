//! Mock store implementation using mockall

use async_trait::async_trait;
use binder_api_types::{Template, TemplateDocument};
use binder_config::DatabaseConfig;
use binder_interfaces::{StoreError, TemplateStore};
use mockall::mock;

mock! {
    pub TemplateStore {}

    #[async_trait]
    impl TemplateStore for TemplateStore {
        async fn open(&self, config: &DatabaseConfig) -> Result<(), StoreError>;
        async fn close(&self) -> Result<(), StoreError>;
        async fn upsert(&self, name: &str, document: TemplateDocument) -> Result<Template, StoreError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<Template>, StoreError>;
        async fn find_all(&self) -> Result<Vec<Template>, StoreError>;
        async fn health_check(&self) -> Result<(), StoreError>;
    }
}

impl MockTemplateStore {
    /// A mock whose `open`, `close` and `health_check` always succeed
    pub fn lenient() -> Self {
        let mut mock = Self::new();
        mock.expect_open().returning(|_| Ok(()));
        mock.expect_close().returning(|| Ok(()));
        mock.expect_health_check().returning(|| Ok(()));
        mock
    }
}

pub mod mock_errors {
    use binder_interfaces::StoreError;

    pub fn connection_refused() -> StoreError {
        StoreError::connection("connection refused")
    }

    pub fn query_failed() -> StoreError {
        StoreError::query("disk I/O error")
    }

    pub fn corrupt_record() -> StoreError {
        StoreError::serialization("expected sequence for services")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lenient_mock_lifecycle() {
        let store = MockTemplateStore::lenient();
        store.open(&DatabaseConfig::default()).await.unwrap();
        store.health_check().await.unwrap();
        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_mock_returns_configured_error() {
        let mut store = MockTemplateStore::new();
        store
            .expect_find_all()
            .returning(|| Err(mock_errors::query_failed()));

        let err = store.find_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Query { .. }));
        assert!(mock_errors::connection_refused().is_connection());
        assert!(!mock_errors::corrupt_record().is_connection());
    }
}
