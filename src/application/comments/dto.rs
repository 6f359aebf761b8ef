use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::comment::Comment;

#[derive(Debug, Clone, Deserialize)]
pub struct AddCommentRequest {
    pub kudos_card_id: Uuid,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCommentRequest {
    pub comment_id: Uuid,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetCommentsRequest {
    pub kudos_card_id: Uuid,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: Uuid,
    pub kudos_card_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Comment> for CommentDto {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id(),
            kudos_card_id: comment.kudos_card_id(),
            user_id: comment.user_id(),
            content: comment.content().to_string(),
            created_at: comment.created_at().to_rfc3339(),
            updated_at: comment.updated_at().to_rfc3339(),
        }
    }
}

/// The new comment plus the card's live comment count after adding it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCommentResponse {
    pub comment: CommentDto,
    pub total_comments: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCommentResponse {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentsPageResponse {
    pub comments: Vec<CommentDto>,
    pub total: i64,
}
