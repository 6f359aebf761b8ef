use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::comment::Comment;

/// Repository trait for comments on kudos cards
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a new comment
    async fn add(&self, comment: &Comment) -> RepositoryResult<()>;

    /// Persist new content for an existing comment
    async fn update(&self, comment: &Comment) -> RepositoryResult<()>;

    /// Store the tombstone of a comment; the row is kept
    async fn soft_delete(&self, comment: &Comment) -> RepositoryResult<()>;

    /// Find a comment by ID, including deleted ones
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Comment>>;

    /// Live comments on a card, oldest first
    async fn find_by_kudos_card_id(
        &self,
        kudos_card_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> RepositoryResult<Vec<Comment>>;

    /// Number of live comments on a card
    async fn count_by_kudos_card_id(&self, kudos_card_id: Uuid) -> RepositoryResult<i64>;
}
