/// CRUD operations tests for all models
pub mod crud_tests;

/// Integration tests combining multiple components
pub mod integration_tests {
    use super::crud_tests::setup_test_db;
    use crate::{member, board, comment};
    use sea_orm::{EntityTrait, ActiveModelTrait, Set, QueryFilter, ColumnTrait};
    use anyhow::Result;
    use uuid::Uuid;

    /// Test complete workflow: member -> board -> comment
    #[tokio::test]
    async fn test_complete_workflow() -> Result<()> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }

        let db = setup_test_db().await?;

        // Create member
        let email = format!("workflow_{}@example.com", Uuid::new_v4());
        let test_member = member::create(&db, &email, "Workflow Member").await?;

        // Create board
        let test_board = board::create(&db, test_member.id, "Workflow board", "workflow body").await?;

        // Create comment
        let am = comment::ActiveModel {
            board_id: Set(test_board.id),
            member_id: Set(test_member.id),
            text: Set("workflow comment".to_string()),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };
        let test_comment = am.insert(&db).await?;

        // Verify all entities exist and are properly linked
        let found_member = member::Entity::find_by_id(test_member.id).one(&db).await?;
        assert!(found_member.is_some());

        let found_board = board::Entity::find_by_id(test_board.id).one(&db).await?;
        assert!(found_board.is_some());
        assert_eq!(found_board.unwrap().member_id, test_member.id);

        let found_comment = comment::Entity::find_by_id(test_comment.id).one(&db).await?;
        assert!(found_comment.is_some());
        let found_comment = found_comment.unwrap();
        assert_eq!(found_comment.board_id, test_board.id);
        assert_eq!(found_comment.member_id, test_member.id);

        // Cleanup in reverse order
        comment::Entity::delete_by_id(test_comment.id).exec(&db).await?;
        board::Entity::delete_by_id(test_board.id).exec(&db).await?;
        member::Entity::delete_by_id(test_member.id).exec(&db).await?;

        Ok(())
    }

    /// Test cascading delete via FK on_delete=CASCADE by deleting the board
    #[tokio::test]
    async fn test_board_delete_cascades_to_comments() -> Result<()> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }

        let db = setup_test_db().await?;

        let email = format!("cascade_{}@example.com", Uuid::new_v4());
        let test_member = member::create(&db, &email, "Cascade Member").await?;
        let test_board = board::create(&db, test_member.id, "Cascade board", "body").await?;

        let mut comment_ids = vec![];
        for i in 0..3 {
            let am = comment::ActiveModel {
                board_id: Set(test_board.id),
                member_id: Set(test_member.id),
                text: Set(format!("cascade comment {}", i)),
                created_at: Set(chrono::Utc::now().into()),
                ..Default::default()
            };
            let c = am.insert(&db).await?;
            comment_ids.push(c.id);
        }

        let before = comment::Entity::find()
            .filter(comment::Column::BoardId.eq(test_board.id))
            .all(&db)
            .await?;
        assert_eq!(before.len(), 3);

        board::Entity::delete_by_id(test_board.id).exec(&db).await?;

        // Comments should not be findable after the parent board is gone
        for &id in &comment_ids {
            let c = comment::Entity::find_by_id(id).one(&db).await?;
            assert!(c.is_none());
        }

        // Cleanup
        member::Entity::delete_by_id(test_member.id).exec(&db).await?;

        Ok(())
    }
}
