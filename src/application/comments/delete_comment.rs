use std::sync::Arc;
use uuid::Uuid;

use super::dto::DeleteCommentResponse;
use super::find_own_comment;
use crate::application::errors::UseCaseResult;
use crate::domain::repositories::CommentRepository;

/// Soft-deletes a comment; only its author may do so
pub struct DeleteCommentUseCase {
    comments: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(comments: Arc<dyn CommentRepository>) -> Self {
        Self { comments }
    }

    pub async fn execute(
        &self,
        comment_id: Uuid,
        user_id: Uuid,
    ) -> UseCaseResult<DeleteCommentResponse> {
        let mut comment = find_own_comment(self.comments.as_ref(), comment_id, user_id).await?;

        comment.mark_as_deleted();
        self.comments.soft_delete(&comment).await?;

        tracing::info!(comment_id = %comment_id, "comment deleted");
        Ok(DeleteCommentResponse { success: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::UseCaseError;
    use crate::application::test_support::FakeCommentRepository;
    use crate::domain::comment::Comment;

    #[tokio::test]
    async fn author_soft_deletes_comment() {
        let comment = Comment::create(Uuid::new_v4(), Uuid::new_v4(), "Bye").unwrap();
        let repo = Arc::new(FakeCommentRepository::with_comment(comment.clone()));

        let response = DeleteCommentUseCase::new(repo.clone())
            .execute(comment.id(), comment.user_id())
            .await
            .unwrap();

        assert!(response.success);
        let stored = repo.get(comment.id()).expect("row is retained");
        assert!(stored.is_deleted());
        assert_eq!(stored.content(), "Bye");
    }

    #[tokio::test]
    async fn non_owner_cannot_delete() {
        let comment = Comment::create(Uuid::new_v4(), Uuid::new_v4(), "Mine").unwrap();
        let repo = Arc::new(FakeCommentRepository::with_comment(comment.clone()));

        let result = DeleteCommentUseCase::new(repo.clone())
            .execute(comment.id(), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(UseCaseError::UnauthorizedAccess(_))));
        assert_eq!(repo.log.count("soft_delete"), 0);
        assert!(!repo.get(comment.id()).unwrap().is_deleted());
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let comment = Comment::create(Uuid::new_v4(), Uuid::new_v4(), "Once").unwrap();
        let repo = Arc::new(FakeCommentRepository::with_comment(comment.clone()));
        let use_case = DeleteCommentUseCase::new(repo.clone());

        use_case
            .execute(comment.id(), comment.user_id())
            .await
            .unwrap();
        let result = use_case.execute(comment.id(), comment.user_id()).await;

        assert!(matches!(result, Err(UseCaseError::NotFound(_))));
        assert_eq!(repo.log.count("soft_delete"), 1);
    }
}
