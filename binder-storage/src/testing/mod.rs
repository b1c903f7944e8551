//! Testing utilities for binder-storage
//!
//! Enabled with the `testing` feature:
//!
//! ```toml
//! [dev-dependencies]
//! binder-storage = { path = "../binder-storage", features = ["testing"] }
//! ```
//!
//! - `MockTemplateStore` - mockall implementation of `TemplateStore`
//! - `TemplateDocumentBuilder` - builder for template payloads
//! - `mock_errors` - canned store errors for failure-path tests

pub mod builders;
pub mod mocks;

pub use builders::{example_requirements, TemplateDocumentBuilder};
pub use mocks::{mock_errors, MockTemplateStore};
