use std::sync::Arc;
use uuid::Uuid;

use super::dto::{ReactionDto, ReactionsResponse};
use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::domain::repositories::{KudosCardRepository, ReactionRepository};

/// Lists the reactions on a kudos card with per-type counts
pub struct GetReactionsUseCase {
    reactions: Arc<dyn ReactionRepository>,
    kudos_cards: Arc<dyn KudosCardRepository>,
}

impl GetReactionsUseCase {
    pub fn new(
        reactions: Arc<dyn ReactionRepository>,
        kudos_cards: Arc<dyn KudosCardRepository>,
    ) -> Self {
        Self {
            reactions,
            kudos_cards,
        }
    }

    pub async fn execute(&self, kudos_card_id: Uuid) -> UseCaseResult<ReactionsResponse> {
        if !self.kudos_cards.exists(kudos_card_id).await? {
            return Err(UseCaseError::NotFound(format!(
                "Kudos card not found: {}",
                kudos_card_id
            )));
        }

        let reactions = self.reactions.find_by_kudos_card_id(kudos_card_id).await?;
        let reaction_counts = self.reactions.count_by_type(kudos_card_id).await?;

        Ok(ReactionsResponse {
            reactions: reactions.iter().map(ReactionDto::from).collect(),
            reaction_counts,
        })
    }
}
