use std::sync::Arc;
use uuid::Uuid;

use super::dto::RemoveReactionResponse;
use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::domain::repositories::ReactionRepository;

/// Permanently removes a reaction; only its author may do so
pub struct RemoveReactionUseCase {
    reactions: Arc<dyn ReactionRepository>,
}

impl RemoveReactionUseCase {
    pub fn new(reactions: Arc<dyn ReactionRepository>) -> Self {
        Self { reactions }
    }

    pub async fn execute(
        &self,
        reaction_id: Uuid,
        user_id: Uuid,
    ) -> UseCaseResult<RemoveReactionResponse> {
        let reaction = self
            .reactions
            .find_by_id(reaction_id)
            .await?
            .ok_or_else(|| UseCaseError::NotFound(format!("Reaction not found: {}", reaction_id)))?;

        if !reaction.is_authored_by(user_id) {
            return Err(UseCaseError::UnauthorizedAccess(
                "Only the author can remove this reaction".to_string(),
            ));
        }

        self.reactions.remove(reaction.id()).await?;
        let reaction_counts = self
            .reactions
            .count_by_type(reaction.kudos_card_id())
            .await?;

        Ok(RemoveReactionResponse {
            success: true,
            reaction_counts,
        })
    }
}
