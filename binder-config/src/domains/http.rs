//! HTTP binding behaviour

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// How `GET /templates/{name}` renders a template that does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingTemplateResponse {
    /// 200 with an empty JSON object, what existing Binder clients expect
    #[default]
    EmptyObject,
    /// 404 with an error body
    NotFound,
}

/// HTTP binding configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpBindingConfig {
    pub missing_template: MissingTemplateResponse,
}

impl Validatable for HttpBindingConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "http"
    }
}
