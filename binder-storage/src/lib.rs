//! # Binder Storage
//!
//! Template store backends implementing [`binder_interfaces::TemplateStore`]:
//!
//! - [`SeaOrmTemplateStore`] - SQL persistence through SeaORM (SQLite by default)
//! - [`InMemoryTemplateStore`] - process-local map, selected with a `memory://` URL
//!
//! [`create_template_store`] picks the backend from the configured URL.

pub mod factory;
pub mod memory;
pub mod seaorm;

#[cfg(feature = "testing")]
pub mod testing;

pub use factory::create_template_store;
pub use memory::InMemoryTemplateStore;
pub use seaorm::{DatabaseConnection, DatabaseError, SeaOrmTemplateStore};
