//! # Binder API Types
//!
//! Template types shared by every layer of the Binder registry: the store
//! persists them, the registry module validates them and both transport
//! bindings render them.
//!
//! Field names on the wire are kebab-case (`image-name`, `time-created`),
//! matching what existing Binder clients send.

pub mod template;

pub use template::{ResourceLimits, ServiceSpec, Template, TemplateDocument, TemplateReceipt};
