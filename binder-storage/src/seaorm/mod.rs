//! SeaORM implementation of the template store
//!
//! This module provides the entity, migrations, connection management and
//! the [`TemplateStore`](binder_interfaces::TemplateStore) implementation.

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod store;

pub use connection::{DatabaseConnection, DatabaseError};
pub use entities::templates;
pub use store::SeaOrmTemplateStore;
