//! Create `member` table.
//!
//! Root entity for the board domain; boards and comments reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(big_integer(Member::Id).primary_key().auto_increment())
                    .col(string_len(Member::Email, 255).unique_key().not_null())
                    .col(string_len(Member::Name, 128).not_null())
                    .col(timestamp_with_time_zone(Member::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Member::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Member { Table, Id, Email, Name, CreatedAt }
