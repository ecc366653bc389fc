//! Create `comment` table with FKs to `board` and `member`.
//!
//! Only `text` is meant to change after insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(big_integer(Comment::Id).primary_key().auto_increment())
                    .col(big_integer(Comment::BoardId).not_null())
                    .col(big_integer(Comment::MemberId).not_null())
                    .col(text(Comment::Text).not_null())
                    .col(timestamp_with_time_zone(Comment::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_board")
                            .from(Comment::Table, Comment::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_member")
                            .from(Comment::Table, Comment::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Comment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Comment { Table, Id, BoardId, MemberId, Text, CreatedAt }

#[derive(DeriveIden)]
enum Board { Table, Id }

#[derive(DeriveIden)]
enum Member { Table, Id }
