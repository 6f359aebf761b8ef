// Comment use cases
// Comments are soft-deleted: the row stays and carries a deletion timestamp.

pub mod add_comment;
pub mod delete_comment;
pub mod dto;
pub mod get_comments;
pub mod update_comment;

pub use add_comment::AddCommentUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use get_comments::GetCommentsUseCase;
pub use update_comment::UpdateCommentUseCase;

use uuid::Uuid;

use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::domain::comment::Comment;
use crate::domain::repositories::CommentRepository;

/// Loads a live comment and checks that `user_id` wrote it
async fn find_own_comment(
    comments: &dyn CommentRepository,
    comment_id: Uuid,
    user_id: Uuid,
) -> UseCaseResult<Comment> {
    let comment = comments
        .find_by_id(comment_id)
        .await?
        .filter(|c| !c.is_deleted())
        .ok_or_else(|| UseCaseError::NotFound(format!("Comment not found: {}", comment_id)))?;

    if !comment.is_authored_by(user_id) {
        return Err(UseCaseError::UnauthorizedAccess(
            "Only the author can modify this comment".to_string(),
        ));
    }

    Ok(comment)
}
