use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Comment, CommentDraft, CommentUpdate};
use super::repository::CommentRepository;
use crate::errors::{ErrorCode, ServiceError};
use crate::pagination::Page;

/// Comment business service independent of web framework and storage engine.
pub struct CommentService<R: CommentRepository> {
    repo: Arc<R>,
}

impl<R: CommentRepository> CommentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a new comment; the storage assigns the id. Text is stored
    /// as sent, with no content rules.
    ///
    /// # Examples
    /// ```
    /// use service::comment::{CommentService, repository::mock::MockCommentRepository};
    /// use service::comment::domain::CommentDraft;
    /// use std::sync::Arc;
    /// let svc = CommentService::new(Arc::new(MockCommentRepository::default()));
    /// let created = tokio_test::block_on(svc.create(CommentDraft::new(1, 1, "hello"))).unwrap();
    /// assert_eq!(created.id, 1);
    /// assert_eq!(created.text, "hello");
    /// ```
    #[instrument(skip(self, draft), fields(board_id = draft.board_id, member_id = draft.member_id))]
    pub async fn create(&self, draft: CommentDraft) -> Result<Comment, ServiceError> {
        // A caller-supplied id is ignored; the storage assigns one.
        let draft = CommentDraft { id: None, ..draft };
        let created = self.repo.save(draft).await?;
        info!(comment_id = created.id, "comment_created");
        Ok(created)
    }

    /// Replace the text of an existing comment; every other field is kept.
    pub async fn update(&self, update: CommentUpdate) -> Result<Comment, ServiceError> {
        let existing = self.find_verified(update.id).await?;
        let saved = self.repo.save(existing.with_text(update.text)).await?;
        info!(comment_id = saved.id, "comment_updated");
        Ok(saved)
    }

    /// Read a single comment.
    pub async fn find_one(&self, id: i64) -> Result<Comment, ServiceError> {
        self.find_verified(id).await
    }

    /// One page of all comments, ordered by id. Zero-based page index; a
    /// page past the end is empty, not an error.
    pub async fn find_page(&self, page: u64, per_page: u64) -> Result<Page<Comment>, ServiceError> {
        self.repo.find_all_paged(page, per_page).await
    }

    /// Remove a comment.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let existing = self.find_verified(id).await?;
        self.repo.delete(existing).await?;
        info!(comment_id = id, "comment_deleted");
        Ok(())
    }

    /// Fetch by id or fail with the catalog's `CommentNotFound`.
    pub async fn find_verified(&self, id: i64) -> Result<Comment, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Domain(ErrorCode::CommentNotFound))
    }
}
