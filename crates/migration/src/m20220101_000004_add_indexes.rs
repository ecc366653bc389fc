use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Board: index on member_id
        manager
            .create_index(
                Index::create()
                    .name("idx_board_member")
                    .table(Board::Table)
                    .col(Board::MemberId)
                    .to_owned(),
            )
            .await?;

        // Comment: index on board_id and member_id
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_board")
                    .table(Comment::Table)
                    .col(Comment::BoardId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_member")
                    .table(Comment::Table)
                    .col(Comment::MemberId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_board_member").table(Board::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_comment_board").table(Comment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_comment_member").table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Board { Table, MemberId }

#[derive(DeriveIden)]
enum Comment { Table, BoardId, MemberId }
