use std::sync::Arc;
use uuid::Uuid;

use super::dto::{AddCommentRequest, AddCommentResponse, CommentDto};
use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::domain::comment::Comment;
use crate::domain::repositories::{CommentRepository, KudosCardRepository};

/// Adds a comment to an existing kudos card
pub struct AddCommentUseCase {
    comments: Arc<dyn CommentRepository>,
    kudos_cards: Arc<dyn KudosCardRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        kudos_cards: Arc<dyn KudosCardRepository>,
    ) -> Self {
        Self {
            comments,
            kudos_cards,
        }
    }

    pub async fn execute(
        &self,
        request: AddCommentRequest,
        user_id: Uuid,
    ) -> UseCaseResult<AddCommentResponse> {
        if !self.kudos_cards.exists(request.kudos_card_id).await? {
            return Err(UseCaseError::NotFound(format!(
                "Kudos card not found: {}",
                request.kudos_card_id
            )));
        }

        let comment = Comment::create(request.kudos_card_id, user_id, request.content)
            .map_err(UseCaseError::Validation)?;

        self.comments.add(&comment).await?;
        let total_comments = self
            .comments
            .count_by_kudos_card_id(comment.kudos_card_id())
            .await?;

        tracing::info!(
            comment_id = %comment.id(),
            kudos_card_id = %comment.kudos_card_id(),
            "comment added"
        );

        Ok(AddCommentResponse {
            comment: CommentDto::from(&comment),
            total_comments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{FakeCommentRepository, FakeKudosCardRepository};

    #[tokio::test]
    async fn adds_comment_and_returns_total() {
        let card = Uuid::new_v4();
        let user = Uuid::new_v4();
        let comments = Arc::new(FakeCommentRepository::default());
        let cards = Arc::new(FakeKudosCardRepository::with_card(card));
        let use_case = AddCommentUseCase::new(comments.clone(), cards);

        use_case
            .execute(
                AddCommentRequest {
                    kudos_card_id: card,
                    content: "First!".to_string(),
                },
                user,
            )
            .await
            .unwrap();
        let response = use_case
            .execute(
                AddCommentRequest {
                    kudos_card_id: card,
                    content: "Well deserved".to_string(),
                },
                user,
            )
            .await
            .unwrap();

        assert_eq!(response.comment.content, "Well deserved");
        assert_eq!(response.comment.user_id, user);
        assert_eq!(response.total_comments, 2);
        assert!(comments.get(response.comment.id).is_some());
    }

    #[tokio::test]
    async fn missing_card_is_not_found() {
        let comments = Arc::new(FakeCommentRepository::default());
        let use_case =
            AddCommentUseCase::new(comments.clone(), Arc::new(FakeKudosCardRepository::default()));

        let result = use_case
            .execute(
                AddCommentRequest {
                    kudos_card_id: Uuid::new_v4(),
                    content: "Hello".to_string(),
                },
                Uuid::new_v4(),
            )
            .await;

        match result {
            Err(UseCaseError::NotFound(message)) => {
                assert!(message.starts_with("Kudos card not found"))
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
        assert_eq!(comments.log.count("add"), 0);
    }

    #[tokio::test]
    async fn blank_content_is_a_validation_error() {
        let card = Uuid::new_v4();
        let comments = Arc::new(FakeCommentRepository::default());
        let use_case = AddCommentUseCase::new(
            comments.clone(),
            Arc::new(FakeKudosCardRepository::with_card(card)),
        );

        let result = use_case
            .execute(
                AddCommentRequest {
                    kudos_card_id: card,
                    content: "   ".to_string(),
                },
                Uuid::new_v4(),
            )
            .await;

        assert!(matches!(result, Err(UseCaseError::Validation(_))));
        assert_eq!(comments.log.count("add"), 0);
    }
}
