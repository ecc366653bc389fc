use async_trait::async_trait;

use super::domain::{Comment, CommentDraft};
use crate::errors::ServiceError;
use crate::pagination::Page;

/// Repository abstraction for comment persistence.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert and assign an id when `draft.id` is `None`; overwrite the
    /// stored record otherwise. Returns the persisted form.
    async fn save(&self, draft: CommentDraft) -> Result<Comment, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, ServiceError>;
    /// Zero-based page over all comments, ordered by id ascending.
    async fn find_all_paged(&self, page: u64, per_page: u64) -> Result<Page<Comment>, ServiceError>;
    /// Remove a previously fetched record.
    async fn delete(&self, comment: Comment) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCommentRepository {
        rows: Mutex<BTreeMap<i64, Comment>>, // key: comment id
        next_id: Mutex<i64>,
    }

    #[async_trait]
    impl CommentRepository for MockCommentRepository {
        async fn save(&self, draft: CommentDraft) -> Result<Comment, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match draft.id {
                None => {
                    let mut next = self.next_id.lock().unwrap();
                    *next += 1;
                    let comment = Comment {
                        id: *next,
                        board_id: draft.board_id,
                        member_id: draft.member_id,
                        text: draft.text,
                        created_at: Utc::now().into(),
                    };
                    rows.insert(comment.id, comment.clone());
                    Ok(comment)
                }
                Some(id) => {
                    // Overwrite keeps the original insertion timestamp when the row exists.
                    let created_at = rows.get(&id).map(|c| c.created_at).unwrap_or_else(|| Utc::now().into());
                    let comment = Comment {
                        id,
                        board_id: draft.board_id,
                        member_id: draft.member_id,
                        text: draft.text,
                        created_at,
                    };
                    rows.insert(id, comment.clone());
                    Ok(comment)
                }
            }
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.get(&id).cloned())
        }

        async fn find_all_paged(&self, page: u64, per_page: u64) -> Result<Page<Comment>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            let total_items = rows.len() as u64;
            if per_page == 0 {
                return Ok(Page { items: Vec::new(), page, per_page, total_items, total_pages: 0 });
            }
            let total_pages = (total_items + per_page - 1) / per_page;
            // An offset that overflows is past the end of any in-memory set.
            let start = match page.checked_mul(per_page).and_then(|n| usize::try_from(n).ok()) {
                Some(n) => n,
                None => return Ok(Page { items: Vec::new(), page, per_page, total_items, total_pages }),
            };
            let items = rows
                .values()
                .skip(start)
                .take(per_page as usize)
                .cloned()
                .collect();
            Ok(Page { items, page, per_page, total_items, total_pages })
        }

        async fn delete(&self, comment: Comment) -> Result<(), ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            rows.remove(&comment.id);
            Ok(())
        }
    }
}
