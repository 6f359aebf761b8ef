use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::team::Team;

/// Repository trait for Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find all teams, ordered by name
    async fn find_all(&self) -> RepositoryResult<Vec<Team>>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>>;

    /// Insert a new team
    async fn create(&self, team: &Team) -> RepositoryResult<()>;

    /// Persist changes to an existing team
    async fn update(&self, team: &Team) -> RepositoryResult<()>;

    /// Delete a team by ID
    ///
    /// Fails with `RepositoryError::TeamInUse` while any kudos card
    /// references the team.
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}
