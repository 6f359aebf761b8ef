use std::sync::Arc;
use uuid::Uuid;

use super::dto::{CommentDto, UpdateCommentRequest};
use super::find_own_comment;
use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::domain::repositories::CommentRepository;

/// Edits a comment; only its author may do so
pub struct UpdateCommentUseCase {
    comments: Arc<dyn CommentRepository>,
}

impl UpdateCommentUseCase {
    pub fn new(comments: Arc<dyn CommentRepository>) -> Self {
        Self { comments }
    }

    pub async fn execute(
        &self,
        request: UpdateCommentRequest,
        user_id: Uuid,
    ) -> UseCaseResult<CommentDto> {
        let mut comment =
            find_own_comment(self.comments.as_ref(), request.comment_id, user_id).await?;

        comment
            .update(request.content)
            .map_err(UseCaseError::Validation)?;
        self.comments.update(&comment).await?;

        Ok(CommentDto::from(&comment))
    }
}
