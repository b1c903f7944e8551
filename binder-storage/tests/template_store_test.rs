//! Backend behaviour shared by every template store

use binder_api_types::TemplateDocument;
use binder_config::DatabaseConfig;
use binder_interfaces::{StoreError, TemplateStore};
use binder_storage::{create_template_store, InMemoryTemplateStore, SeaOrmTemplateStore};
use std::collections::HashSet;
use std::sync::Arc;

fn spark_document() -> TemplateDocument {
    serde_json::from_value(serde_json::json!({
        "name": "binder-example-requirements",
        "image-name": "binder-project/example-requirements",
        "image-source": "gcr.io/generic-notebooks/binder-project-example-requirements",
        "limits": { "memory": "512MB", "cpu": "10" },
        "services": [{
            "name": "spark",
            "version": "1.4.1",
            "params": { "heap_mem": "4g", "stack_mem": "512m" }
        }]
    }))
    .unwrap()
}

async fn open_sqlite() -> SeaOrmTemplateStore {
    let store = SeaOrmTemplateStore::new();
    store.open(&DatabaseConfig::in_memory_sqlite()).await.unwrap();
    store
}

async fn open_memory() -> InMemoryTemplateStore {
    let store = InMemoryTemplateStore::new();
    store.open(&DatabaseConfig::default()).await.unwrap();
    store
}

async fn assert_round_trip(store: &dyn TemplateStore) {
    let doc = spark_document();
    let stored = store.upsert("binder-example-requirements", doc.clone()).await.unwrap();
    let fetched = store
        .find_by_name("binder-example-requirements")
        .await
        .unwrap()
        .expect("template stored");

    assert_eq!(fetched, stored);
    assert_eq!(fetched.to_document(), doc);
    assert_eq!(fetched.time_created, fetched.time_modified);
}

async fn assert_idempotent_upsert(store: &dyn TemplateStore) {
    let first = store.upsert("repeat", TemplateDocument::named("repeat")).await.unwrap();

    let mut changed = TemplateDocument::named("repeat");
    changed.command = Some(vec!["jupyter".into(), "notebook".into()]);
    changed.port = Some(8888);
    let second = store.upsert("repeat", changed).await.unwrap();

    let all = store.find_all().await.unwrap();
    assert_eq!(all.iter().filter(|t| t.name == "repeat").count(), 1);
    assert_eq!(second.time_created, first.time_created);
    assert!(second.time_modified >= first.time_modified);
    assert_eq!(second.port, Some(8888));
    assert_eq!(second.command.as_ref().map(Vec::len), Some(2));

    let stored = store.find_by_name("repeat").await.unwrap().expect("template stored");
    assert_eq!(stored.time_created, first.time_created);
    assert_eq!(stored.time_modified, second.time_modified);
}

async fn assert_listing(store: &dyn TemplateStore) {
    for name in ["alpha", "beta", "gamma"] {
        store.upsert(name, TemplateDocument::named(name)).await.unwrap();
    }

    let names: HashSet<String> = store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(
        names,
        ["alpha", "beta", "gamma"].iter().map(|s| s.to_string()).collect()
    );
    assert!(store.find_by_name("delta").await.unwrap().is_none());
}

#[tokio::test]
async fn test_sqlite_round_trip() {
    assert_round_trip(&open_sqlite().await).await;
}

#[tokio::test]
async fn test_memory_round_trip() {
    assert_round_trip(&open_memory().await).await;
}

#[tokio::test]
async fn test_sqlite_idempotent_upsert() {
    assert_idempotent_upsert(&open_sqlite().await).await;
}

#[tokio::test]
async fn test_memory_idempotent_upsert() {
    assert_idempotent_upsert(&open_memory().await).await;
}

#[tokio::test]
async fn test_sqlite_listing() {
    assert_listing(&open_sqlite().await).await;
}

#[tokio::test]
async fn test_memory_listing() {
    assert_listing(&open_memory().await).await;
}

#[tokio::test]
async fn test_sqlite_empty_listing() {
    let store = open_sqlite().await;
    assert!(store.find_all().await.unwrap().is_empty());
    assert!(store.health_check().await.is_ok());
}

#[tokio::test]
async fn test_sqlite_concurrent_upserts_same_name() {
    let store = Arc::new(open_sqlite().await);

    let handles: Vec<_> = (0..8u16)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                let mut doc = TemplateDocument::named("contended");
                doc.port = Some(9000 + i);
                store.upsert("contended", doc).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let all = store.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "contended");
}

#[tokio::test]
async fn test_sqlite_file_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("registry.db").display()),
        ..DatabaseConfig::default()
    };

    let store = SeaOrmTemplateStore::new();
    store.open(&config).await.unwrap();
    let stored = store.upsert("durable", spark_document()).await.unwrap();
    store.close().await.unwrap();

    assert!(matches!(
        store.find_by_name("durable").await,
        Err(StoreError::NotOpen)
    ));

    store.open(&config).await.unwrap();
    let fetched = store.find_by_name("durable").await.unwrap().unwrap();
    assert_eq!(fetched.time_created, stored.time_created);
    assert_eq!(fetched.services, stored.services);
    store.close().await.unwrap();
}

#[tokio::test]
async fn test_factory_selects_backend() {
    let memory = create_template_store(&DatabaseConfig {
        url: "memory://".to_string(),
        ..DatabaseConfig::default()
    });
    memory.open(&DatabaseConfig::default()).await.unwrap();
    memory.upsert("m", TemplateDocument::named("m")).await.unwrap();
    assert_eq!(memory.find_all().await.unwrap().len(), 1);

    let sqlite = create_template_store(&DatabaseConfig::in_memory_sqlite());
    assert!(matches!(sqlite.find_all().await, Err(StoreError::NotOpen)));
    sqlite.open(&DatabaseConfig::in_memory_sqlite()).await.unwrap();
    assert!(sqlite.find_all().await.unwrap().is_empty());
}
