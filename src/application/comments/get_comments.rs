use std::sync::Arc;

use super::dto::{CommentDto, CommentsPageResponse, GetCommentsRequest};
use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::application::pagination::Page;
use crate::domain::repositories::{CommentRepository, KudosCardRepository};

/// Lists the live comments on a kudos card, oldest first
pub struct GetCommentsUseCase {
    comments: Arc<dyn CommentRepository>,
    kudos_cards: Arc<dyn KudosCardRepository>,
}

impl GetCommentsUseCase {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        kudos_cards: Arc<dyn KudosCardRepository>,
    ) -> Self {
        Self {
            comments,
            kudos_cards,
        }
    }

    pub async fn execute(&self, request: GetCommentsRequest) -> UseCaseResult<CommentsPageResponse> {
        let page = Page::resolve(request.limit, request.offset)?;

        if !self.kudos_cards.exists(request.kudos_card_id).await? {
            return Err(UseCaseError::NotFound(format!(
                "Kudos card not found: {}",
                request.kudos_card_id
            )));
        }

        let comments = self
            .comments
            .find_by_kudos_card_id(request.kudos_card_id, page.limit, page.offset)
            .await?;
        let total = self
            .comments
            .count_by_kudos_card_id(request.kudos_card_id)
            .await?;

        Ok(CommentsPageResponse {
            comments: comments.iter().map(CommentDto::from).collect(),
            total,
        })
    }
}
