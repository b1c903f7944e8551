//! SeaORM entities

pub mod templates {
    use binder_api_types::{Template, TemplateDocument};
    use binder_interfaces::StoreError;
    use sea_orm::entity::prelude::*;
    use sea_orm::Set;

    /// Template record; list-shaped fields are stored as JSON columns
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "templates")]
    pub struct Model {
        /// Primary key
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Template name, unique across the collection
        #[sea_orm(unique)]
        pub name: String,

        pub image_name: Option<String>,

        pub image_source: Option<String>,

        pub limits: Option<Json>,

        pub services: Json,

        pub command: Option<Json>,

        pub port: Option<i32>,

        /// Set on first insert, never updated
        pub time_created: ChronoDateTimeUtc,

        /// Refreshed on every write
        pub time_modified: ChronoDateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        /// Convert the stored row back into a template
        pub fn into_template(self) -> Result<Template, StoreError> {
            let limits = self.limits.map(serde_json::from_value).transpose()?;
            let services = serde_json::from_value(self.services)?;
            let command = self.command.map(serde_json::from_value).transpose()?;
            let port = self
                .port
                .map(u16::try_from)
                .transpose()
                .map_err(|e| StoreError::serialization(format!("invalid port for '{}': {}", self.name, e)))?;

            Ok(Template {
                name: self.name,
                image_name: self.image_name,
                image_source: self.image_source,
                limits,
                services,
                command,
                port,
                time_created: self.time_created,
                time_modified: self.time_modified,
            })
        }
    }

    impl ActiveModel {
        /// Active model for a fresh insert of `document` under `name`
        pub fn from_document(
            name: &str,
            document: TemplateDocument,
            now: ChronoDateTimeUtc,
        ) -> Result<Self, StoreError> {
            let limits = document.limits.map(serde_json::to_value).transpose()?;
            let services = serde_json::to_value(document.services)?;
            let command = document.command.map(serde_json::to_value).transpose()?;

            Ok(Self {
                name: Set(name.to_string()),
                image_name: Set(document.image_name),
                image_source: Set(document.image_source),
                limits: Set(limits),
                services: Set(services),
                command: Set(command),
                port: Set(document.port.map(i32::from)),
                time_created: Set(now),
                time_modified: Set(now),
                ..Default::default()
            })
        }
    }
}

pub use templates::{
    ActiveModel as TemplateActiveModel, Entity as Templates, Model as TemplateRow,
};
