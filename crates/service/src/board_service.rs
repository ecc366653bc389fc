use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use tracing::info;

use models::board;
use crate::errors::{ErrorCode, ServiceError};
use crate::member_service;
use crate::pagination::Page;

/// Create a board post after verifying the author exists.
pub async fn create_board(db: &DatabaseConnection, member_id: i64, title: &str, content: &str) -> Result<board::Model, ServiceError> {
    member_service::find_verified_member(db, member_id).await?;
    let created = board::create(db, member_id, title, content).await?;
    info!(board_id = created.id, member_id, "board_created");
    Ok(created)
}

/// Get a board by id.
pub async fn get_board(db: &DatabaseConnection, id: i64) -> Result<Option<board::Model>, ServiceError> {
    let found = board::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Fetch by id or fail with the catalog's `BoardNotFound`.
pub async fn find_verified_board(db: &DatabaseConnection, id: i64) -> Result<board::Model, ServiceError> {
    get_board(db, id)
        .await?
        .ok_or(ServiceError::Domain(ErrorCode::BoardNotFound))
}

/// One page of boards ordered by id. Zero-based page index.
pub async fn find_boards_paginated(db: &DatabaseConnection, page: u64, per_page: u64) -> Result<Page<board::Model>, ServiceError> {
    if per_page == 0 {
        let total_items = board::Entity::find()
            .count(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        return Ok(Page { items: Vec::new(), page, per_page, total_items, total_pages: 0 });
    }
    let paginator = board::Entity::find()
        .order_by_asc(board::Column::Id)
        .paginate(db, per_page);
    let totals = paginator
        .num_items_and_pages()
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let items = paginator
        .fetch_page(page)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(Page {
        items,
        page,
        per_page,
        total_items: totals.number_of_items,
        total_pages: totals.number_of_pages,
    })
}

/// Verify the board exists, then remove it. Comments go with it via FK.
pub async fn delete_board(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    let found = find_verified_board(db, id).await?;
    board::Entity::delete_by_id(found.id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(board_id = id, "board_deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::member;
    use uuid::Uuid;

    #[tokio::test]
    async fn board_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let email = format!("svc_board_{}@example.com", Uuid::new_v4());
        let author = member::create(&db, &email, "Board Svc").await?;

        let b = create_board(&db, author.id, "Svc board", "svc body").await?;
        assert_eq!(b.member_id, author.id);

        let found = find_verified_board(&db, b.id).await?;
        assert_eq!(found.id, b.id);

        let page = find_boards_paginated(&db, 0, 100).await?;
        assert!(page.items.iter().any(|x| x.id == b.id));

        delete_board(&db, b.id).await?;
        let missing = find_verified_board(&db, b.id).await.unwrap_err();
        assert_eq!(missing.code(), Some(ErrorCode::BoardNotFound));

        // Deleting again reports the same kind.
        let again = delete_board(&db, b.id).await.unwrap_err();
        assert_eq!(again.code(), Some(ErrorCode::BoardNotFound));

        member::Entity::delete_by_id(author.id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn board_create_requires_existing_author() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let err = create_board(&db, i64::MAX, "No author", "body").await.unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::MemberNotFound));
        Ok(())
    }
}
