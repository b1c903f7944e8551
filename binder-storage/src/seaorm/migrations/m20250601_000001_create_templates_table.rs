use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Templates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Templates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // The unique constraint is the upsert conflict target
                    .col(ColumnDef::new(Templates::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Templates::ImageName).string().null())
                    .col(ColumnDef::new(Templates::ImageSource).string().null())
                    .col(ColumnDef::new(Templates::Limits).json().null())
                    .col(ColumnDef::new(Templates::Services).json().not_null())
                    .col(ColumnDef::new(Templates::Command).json().null())
                    .col(ColumnDef::new(Templates::Port).integer().null())
                    .col(
                        ColumnDef::new(Templates::TimeCreated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Templates::TimeModified)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Templates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Templates {
    Table,
    Id,
    Name,
    ImageName,
    ImageSource,
    Limits,
    Services,
    Command,
    Port,
    TimeCreated,
    TimeModified,
}
