//! Create `board` table with FK to `member`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Board::Table)
                    .if_not_exists()
                    .col(big_integer(Board::Id).primary_key().auto_increment())
                    .col(big_integer(Board::MemberId).not_null())
                    .col(string_len(Board::Title, 255).not_null())
                    .col(text(Board::Content).not_null())
                    .col(timestamp_with_time_zone(Board::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_member")
                            .from(Board::Table, Board::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Board::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Board { Table, Id, MemberId, Title, Content, CreatedAt }

#[derive(DeriveIden)]
enum Member { Table, Id }
