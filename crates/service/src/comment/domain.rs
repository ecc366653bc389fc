use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Persisted comment (business view).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub board_id: i64,
    pub member_id: i64,
    pub text: String,
    pub created_at: DateTime<FixedOffset>,
}

/// Save input. `id` is `None` until the storage assigns one; a draft
/// carrying `Some(id)` overwrites the stored record with that id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDraft {
    pub id: Option<i64>,
    pub board_id: i64,
    pub member_id: i64,
    pub text: String,
}

impl CommentDraft {
    pub fn new(board_id: i64, member_id: i64, text: impl Into<String>) -> Self {
        Self { id: None, board_id, member_id, text: text.into() }
    }
}

impl Comment {
    /// Overwrite-save input that replaces only the body text.
    pub fn with_text(&self, text: impl Into<String>) -> CommentDraft {
        CommentDraft {
            id: Some(self.id),
            board_id: self.board_id,
            member_id: self.member_id,
            text: text.into(),
        }
    }
}

/// Update request: replacement text for an existing comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentUpdate {
    pub id: i64,
    pub text: String,
}
