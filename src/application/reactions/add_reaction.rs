use std::sync::Arc;
use uuid::Uuid;

use super::dto::{AddReactionRequest, AddReactionResponse, ReactionDto};
use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::domain::reaction::{Reaction, ReactionType};
use crate::domain::repositories::{KudosCardRepository, ReactionRepository, RepositoryError};

/// Adds a reaction to a kudos card
///
/// A user can use each reaction type once per card.
pub struct AddReactionUseCase {
    reactions: Arc<dyn ReactionRepository>,
    kudos_cards: Arc<dyn KudosCardRepository>,
}

impl AddReactionUseCase {
    pub fn new(
        reactions: Arc<dyn ReactionRepository>,
        kudos_cards: Arc<dyn KudosCardRepository>,
    ) -> Self {
        Self {
            reactions,
            kudos_cards,
        }
    }

    pub async fn execute(
        &self,
        request: AddReactionRequest,
        user_id: Uuid,
    ) -> UseCaseResult<AddReactionResponse> {
        let reaction_type: ReactionType = request
            .reaction_type
            .parse()
            .map_err(UseCaseError::Validation)?;

        if !self.kudos_cards.exists(request.kudos_card_id).await? {
            return Err(UseCaseError::NotFound(format!(
                "Kudos card not found: {}",
                request.kudos_card_id
            )));
        }

        let existing = self
            .reactions
            .find_by_user_and_type(request.kudos_card_id, user_id, reaction_type)
            .await?;
        if existing.is_some() {
            return Err(duplicate(reaction_type));
        }

        let reaction = Reaction::create(request.kudos_card_id, user_id, reaction_type)
            .map_err(UseCaseError::Validation)?;

        // The unique index still catches a concurrent insert of the same reaction
        self.reactions.add(&reaction).await.map_err(|e| match e {
            RepositoryError::Duplicate(_) => duplicate(reaction_type),
            other => other.into(),
        })?;

        let reaction_counts = self.reactions.count_by_type(request.kudos_card_id).await?;

        Ok(AddReactionResponse {
            reaction: ReactionDto::from(&reaction),
            reaction_counts,
        })
    }
}

fn duplicate(reaction_type: ReactionType) -> UseCaseError {
    UseCaseError::DuplicateReaction(format!(
        "You have already reacted with '{}' to this kudos card",
        reaction_type
    ))
}
