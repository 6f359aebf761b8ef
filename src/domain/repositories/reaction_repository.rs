use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::reaction::{Reaction, ReactionCounts, ReactionType};

/// Repository trait for reactions on kudos cards
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Insert a new reaction
    async fn add(&self, reaction: &Reaction) -> RepositoryResult<()>;

    /// Permanently delete a reaction
    async fn remove(&self, id: Uuid) -> RepositoryResult<()>;

    /// Find a reaction by ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Reaction>>;

    /// All reactions on a card, oldest first
    async fn find_by_kudos_card_id(&self, kudos_card_id: Uuid) -> RepositoryResult<Vec<Reaction>>;

    /// The reaction of one type left by one user on one card, if any
    async fn find_by_user_and_type(
        &self,
        kudos_card_id: Uuid,
        user_id: Uuid,
        reaction_type: ReactionType,
    ) -> RepositoryResult<Option<Reaction>>;

    /// Per-type reaction counts for a card
    async fn count_by_type(&self, kudos_card_id: Uuid) -> RepositoryResult<ReactionCounts>;
}
