use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set};

use models::comment;

use crate::comment::domain::{Comment, CommentDraft};
use crate::comment::repository::CommentRepository;
use crate::errors::ServiceError;
use crate::pagination::Page;

pub struct SeaOrmCommentRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: comment::Model) -> Comment {
    Comment { id: m.id, board_id: m.board_id, member_id: m.member_id, text: m.text, created_at: m.created_at }
}

#[async_trait::async_trait]
impl CommentRepository for SeaOrmCommentRepository {
    async fn save(&self, draft: CommentDraft) -> Result<Comment, ServiceError> {
        match draft.id {
            None => {
                let am = comment::ActiveModel {
                    board_id: Set(draft.board_id),
                    member_id: Set(draft.member_id),
                    text: Set(draft.text),
                    created_at: Set(chrono::Utc::now().into()),
                    ..Default::default()
                };
                let created = am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
                Ok(to_domain(created))
            }
            Some(id) => {
                // created_at stays whatever the insert wrote
                let am = comment::ActiveModel {
                    id: Set(id),
                    board_id: Set(draft.board_id),
                    member_id: Set(draft.member_id),
                    text: Set(draft.text),
                    created_at: NotSet,
                };
                let updated = am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
                Ok(to_domain(updated))
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, ServiceError> {
        let found = comment::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.map(to_domain))
    }

    async fn find_all_paged(&self, page: u64, per_page: u64) -> Result<Page<Comment>, ServiceError> {
        if per_page == 0 {
            // The paginator cannot take a zero page size.
            let total_items = comment::Entity::find()
                .count(&self.db)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?;
            return Ok(Page { items: Vec::new(), page, per_page, total_items, total_pages: 0 });
        }
        let paginator = comment::Entity::find()
            .order_by_asc(comment::Column::Id)
            .paginate(&self.db, per_page);
        let totals = paginator
            .num_items_and_pages()
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let items = paginator
            .fetch_page(page)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .into_iter()
            .map(to_domain)
            .collect();
        Ok(Page {
            items,
            page,
            per_page,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }

    async fn delete(&self, comment: Comment) -> Result<(), ServiceError> {
        comment::Entity::delete_by_id(comment.id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}
