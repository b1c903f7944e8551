//! Builders for template payloads used in tests

use binder_api_types::{ResourceLimits, ServiceSpec, TemplateDocument};
use serde_json::{Map, Value};

/// Builder pattern for template documents
pub struct TemplateDocumentBuilder {
    document: TemplateDocument,
}

impl TemplateDocumentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            document: TemplateDocument::named(name),
        }
    }

    pub fn with_image(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.document.image_name = Some(name.into());
        self.document.image_source = Some(source.into());
        self
    }

    pub fn with_limits(mut self, memory: impl Into<String>, cpu: impl Into<String>) -> Self {
        self.document.limits = Some(ResourceLimits {
            memory: Some(memory.into()),
            cpu: Some(cpu.into()),
        });
        self
    }

    pub fn with_service(mut self, name: impl Into<String>, version: impl Into<String>, params: Value) -> Self {
        let params = match params {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        self.document.services.push(ServiceSpec {
            name: name.into(),
            version: version.into(),
            params,
        });
        self
    }

    pub fn with_command(mut self, command: &[&str]) -> Self {
        self.document.command = Some(command.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.document.port = Some(port);
        self
    }

    /// Clear the name, producing an invalid payload
    pub fn without_name(mut self) -> Self {
        self.document.name = None;
        self
    }

    pub fn build(self) -> TemplateDocument {
        self.document
    }
}

/// The `binder-example-requirements` template with a spark service
pub fn example_requirements() -> TemplateDocument {
    TemplateDocumentBuilder::new("binder-example-requirements")
        .with_image(
            "binder-project/example-requirements",
            "gcr.io/generic-notebooks/binder-project-example-requirements",
        )
        .with_limits("512MB", "10")
        .with_service(
            "spark",
            "1.4.1",
            serde_json::json!({ "heap_mem": "4g", "stack_mem": "512m" }),
        )
        .build()
}
