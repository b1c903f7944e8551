use async_trait::async_trait;
use binder_api_types::{Template, TemplateDocument};
use binder_config::DatabaseConfig;
use binder_interfaces::{StoreError, TemplateStore};
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, TransactionTrait};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::connection::{DatabaseConnection, DatabaseError};
use super::entities::{templates, TemplateActiveModel, Templates};

/// SeaORM-backed template store
///
/// The connection slot is written only by `open`/`close`; request paths
/// take a cheap clone of the pooled handle.
#[derive(Default)]
pub struct SeaOrmTemplateStore {
    db: RwLock<Option<DatabaseConnection>>,
}

impl SeaOrmTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn connection(&self) -> Result<DatabaseConnection, StoreError> {
        self.db.read().await.clone().ok_or(StoreError::NotOpen)
    }
}

fn query_error(err: DbErr) -> StoreError {
    StoreError::query(err.to_string())
}

fn connection_error(err: DatabaseError) -> StoreError {
    StoreError::connection(err.to_string())
}

#[async_trait]
impl TemplateStore for SeaOrmTemplateStore {
    async fn open(&self, config: &DatabaseConfig) -> Result<(), StoreError> {
        let mut slot = self.db.write().await;
        if slot.is_some() {
            warn!("Template store already open, keeping existing connection");
            return Ok(());
        }

        let db = DatabaseConnection::new(config)
            .await
            .map_err(connection_error)?;
        db.migrate().await.map_err(connection_error)?;

        *slot = Some(db);
        info!("Template store opened");
        Ok(())
    }

    async fn close(&self) -> Result<(), StoreError> {
        match self.db.write().await.take() {
            Some(db) => db.close().await.map_err(connection_error),
            None => {
                debug!("Template store was not open, nothing to close");
                Ok(())
            }
        }
    }

    async fn upsert(&self, name: &str, document: TemplateDocument) -> Result<Template, StoreError> {
        let db = self.connection().await?;
        let model = TemplateActiveModel::from_document(name, document, Utc::now())?;

        let txn = db.get_connection().begin().await.map_err(query_error)?;

        // time_created is deliberately absent from the update set
        Templates::insert(model)
            .on_conflict(
                OnConflict::column(templates::Column::Name)
                    .update_columns([
                        templates::Column::ImageName,
                        templates::Column::ImageSource,
                        templates::Column::Limits,
                        templates::Column::Services,
                        templates::Column::Command,
                        templates::Column::Port,
                        templates::Column::TimeModified,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
            .map_err(query_error)?;

        let stored = Templates::find()
            .filter(templates::Column::Name.eq(name))
            .one(&txn)
            .await
            .map_err(query_error)?
            .ok_or_else(|| StoreError::query(format!("template '{}' missing after upsert", name)))?;

        txn.commit().await.map_err(query_error)?;

        debug!(template = name, "Template upserted");
        stored.into_template()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Template>, StoreError> {
        let db = self.connection().await?;
        Templates::find()
            .filter(templates::Column::Name.eq(name))
            .one(db.get_connection())
            .await
            .map_err(query_error)?
            .map(templates::Model::into_template)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Template>, StoreError> {
        let db = self.connection().await?;
        Templates::find()
            .all(db.get_connection())
            .await
            .map_err(query_error)?
            .into_iter()
            .map(templates::Model::into_template)
            .collect()
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let db = self.connection().await?;
        db.ping().await.map_err(connection_error)
    }
}
