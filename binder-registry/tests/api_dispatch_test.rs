//! Registry scenario over the in-process API binding

use binder_config::{DatabaseConfig, RegistryConfig};
use binder_interfaces::BinderModule;
use binder_registry::{ApiReply, ApiRequest, ModuleBindings, TemplateRegistry};
use serde_json::json;
use std::sync::Arc;

fn memory_config() -> RegistryConfig {
    RegistryConfig {
        database: DatabaseConfig {
            url: "memory://".to_string(),
            ..DatabaseConfig::default()
        },
        ..RegistryConfig::default()
    }
}

#[tokio::test]
async fn test_dispatch_scenario() {
    let config = memory_config();
    let registry = Arc::new(TemplateRegistry::from_config(&config));
    let api = registry.clone().bind_api();

    // Before start every handler reports not_started
    let mut reply = ApiReply::default();
    api.dispatch("fetchAll", ApiRequest::new(), &mut reply).await.unwrap();
    assert_eq!(reply, ApiReply::NotStarted);

    registry.start(&config).await.unwrap();

    let template = json!({
        "name": "binder-example-requirements",
        "image-name": "binder-project/example-requirements",
        "limits": { "memory": "512MB", "cpu": "10" },
        "services": [{
            "name": "spark",
            "version": "1.4.1",
            "params": { "heap_mem": "4g", "stack_mem": "512m" }
        }]
    });

    let mut reply = ApiReply::default();
    let request = ApiRequest::new().with_param("template", template);
    api.dispatch("register", request, &mut reply).await.unwrap();
    let ApiReply::Success(receipt) = reply else {
        panic!("register did not succeed: {:?}", reply);
    };
    assert_eq!(receipt["name"], "binder-example-requirements");
    assert!(receipt["time-created"].is_string());

    let mut reply = ApiReply::default();
    let request = ApiRequest::new().with_param("template-name", json!("binder-example-requirements"));
    api.dispatch("fetch", request, &mut reply).await.unwrap();
    let ApiReply::Success(fetched) = reply else {
        panic!("fetch did not succeed: {:?}", reply);
    };
    assert_eq!(fetched["name"], "binder-example-requirements");
    assert_eq!(fetched["services"][0]["name"], "spark");

    let mut reply = ApiReply::default();
    let request = ApiRequest::new().with_param(
        "template-name",
        json!("binder-example-requirements-blahblah"),
    );
    api.dispatch("fetch", request, &mut reply).await.unwrap();
    assert_eq!(reply, ApiReply::DoesNotExist);

    let mut reply = ApiReply::default();
    api.dispatch("fetchAll", ApiRequest::new(), &mut reply).await.unwrap();
    let ApiReply::Success(all) = reply else {
        panic!("fetchAll did not succeed: {:?}", reply);
    };
    assert_eq!(all.as_array().unwrap().len(), 1);

    registry.stop().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_registrations_leave_one_record() {
    let config = memory_config();
    let registry = Arc::new(TemplateRegistry::from_config(&config));
    registry.start(&config).await.unwrap();

    let handles: Vec<_> = (0..10u16)
        .map(|i| {
            let registry = registry.clone();
            tokio::spawn(async move {
                let mut document = binder_api_types::TemplateDocument::named("raced");
                document.port = Some(8000 + i);
                registry.register_template(document).await
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_success());
    }

    let all = registry.fetch_all_templates().await.success().unwrap();
    assert_eq!(all.len(), 1);
}
