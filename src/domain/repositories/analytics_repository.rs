use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::analytics::{CategoryCount, KeywordCount, RecipientCount, TeamCount};

/// Ranked analytics over kudos cards
///
/// `period` is the caller's period name as given (for example `"Weekly"`);
/// `None` means all time.
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn get_top_recipients(
        &self,
        limit: i64,
        period: Option<String>,
    ) -> RepositoryResult<Vec<RecipientCount>>;

    async fn get_top_teams(
        &self,
        limit: i64,
        period: Option<String>,
    ) -> RepositoryResult<Vec<TeamCount>>;

    async fn get_trending_categories(
        &self,
        limit: i64,
        period: Option<String>,
    ) -> RepositoryResult<Vec<CategoryCount>>;

    async fn get_trending_keywords(
        &self,
        limit: i64,
        period: Option<String>,
    ) -> RepositoryResult<Vec<KeywordCount>>;
}
