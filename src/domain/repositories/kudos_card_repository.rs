use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::analytics::{CategoryCount, KeywordCount, RecipientCount, TeamCount};

/// Access to kudos cards owned by the kudos module
///
/// Comments and reactions only need existence checks; analytics needs the
/// aggregation queries. `since` limits a query to cards created at or after
/// that instant; `None` covers all time.
#[async_trait]
pub trait KudosCardRepository: Send + Sync {
    /// Returns true if a kudos card with this ID exists
    async fn exists(&self, id: Uuid) -> RepositoryResult<bool>;

    async fn top_recipients(
        &self,
        limit: i64,
        since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<RecipientCount>>;

    async fn top_teams(
        &self,
        limit: i64,
        since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<TeamCount>>;

    async fn trending_categories(
        &self,
        limit: i64,
        since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<CategoryCount>>;

    async fn trending_keywords(
        &self,
        limit: i64,
        since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<KeywordCount>>;
}
