use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resource limits applied to containers built from a template
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResourceLimits {
    /// Memory limit, e.g. "512MB"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    /// CPU limit, e.g. "10"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
}

/// A service attached to a template
///
/// `params` is opaque configuration handed to the service as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceSpec {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub params: serde_json::Map<String, serde_json::Value>,
}

/// Template payload as submitted by a client
///
/// `name` is optional here so that a missing name can be reported as a
/// validation failure instead of a deserialization error. Image fields also
/// accept their camelCase spelling; any other unrecognised field is an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TemplateDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "imageName", skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    #[serde(default, alias = "imageSource", skip_serializing_if = "Option::is_none")]
    pub image_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<ResourceLimits>,
    #[serde(default)]
    pub services: Vec<ServiceSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl TemplateDocument {
    /// Create a document with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// The trimmed template name, if present and non-empty
    pub fn template_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// A stored template record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Template {
    pub name: String,
    #[serde(default, alias = "imageName", skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    #[serde(default, alias = "imageSource", skip_serializing_if = "Option::is_none")]
    pub image_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<ResourceLimits>,
    #[serde(default)]
    pub services: Vec<ServiceSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(alias = "timeCreated")]
    pub time_created: DateTime<Utc>,
    #[serde(alias = "timeModified")]
    pub time_modified: DateTime<Utc>,
}

impl Template {
    /// Build a record from a document under the given name
    ///
    /// The document's own `name` is ignored; the store keys on `name`.
    pub fn from_document(
        name: impl Into<String>,
        document: TemplateDocument,
        time_created: DateTime<Utc>,
        time_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            image_name: document.image_name,
            image_source: document.image_source,
            limits: document.limits,
            services: document.services,
            command: document.command,
            port: document.port,
            time_created,
            time_modified,
        }
    }

    /// Strip the store-managed timestamps
    pub fn to_document(&self) -> TemplateDocument {
        TemplateDocument {
            name: Some(self.name.clone()),
            image_name: self.image_name.clone(),
            image_source: self.image_source.clone(),
            limits: self.limits.clone(),
            services: self.services.clone(),
            command: self.command.clone(),
            port: self.port,
        }
    }

    pub fn receipt(&self) -> TemplateReceipt {
        TemplateReceipt {
            name: self.name.clone(),
            time_created: self.time_created,
            time_modified: self.time_modified,
        }
    }
}

/// Acknowledgement returned from registration
///
/// Registration never echoes the full document back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateReceipt {
    pub name: String,
    #[serde(alias = "timeCreated")]
    pub time_created: DateTime<Utc>,
    #[serde(alias = "timeModified")]
    pub time_modified: DateTime<Utc>,
}
