use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::reaction::{Reaction, ReactionCounts, ReactionType};

/// `reaction_type` arrives as raw text and is parsed by the use case
#[derive(Debug, Clone, Deserialize)]
pub struct AddReactionRequest {
    pub kudos_card_id: Uuid,
    pub reaction_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionDto {
    pub id: Uuid,
    pub kudos_card_id: Uuid,
    pub user_id: Uuid,
    pub reaction_type: ReactionType,
    pub created_at: String,
}

impl From<&Reaction> for ReactionDto {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id(),
            kudos_card_id: reaction.kudos_card_id(),
            user_id: reaction.user_id(),
            reaction_type: reaction.reaction_type(),
            created_at: reaction.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddReactionResponse {
    pub reaction: ReactionDto,
    pub reaction_counts: ReactionCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveReactionResponse {
    pub success: bool,
    pub reaction_counts: ReactionCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionsResponse {
    pub reactions: Vec<ReactionDto>,
    pub reaction_counts: ReactionCounts,
}
