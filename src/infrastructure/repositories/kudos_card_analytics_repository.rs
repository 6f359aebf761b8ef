use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::analytics::{CategoryCount, KeywordCount, Period, RecipientCount, TeamCount};
use crate::domain::repositories::{
    AnalyticsRepository, KudosCardRepository, RepositoryError, RepositoryResult,
};

/// AnalyticsRepository backed by the kudos card aggregation queries
///
/// Turns the period name into the start of its trailing window and forwards
/// the call.
pub struct KudosCardAnalyticsRepository {
    kudos_cards: Arc<dyn KudosCardRepository>,
}

impl KudosCardAnalyticsRepository {
    pub fn new(kudos_cards: Arc<dyn KudosCardRepository>) -> Self {
        Self { kudos_cards }
    }

    fn since(period: Option<String>) -> RepositoryResult<Option<DateTime<Utc>>> {
        period
            .map(|p| {
                Period::parse(&p)
                    .map(|period| period.window_start(Utc::now()))
                    .map_err(RepositoryError::InvalidArgument)
            })
            .transpose()
    }
}

#[async_trait]
impl AnalyticsRepository for KudosCardAnalyticsRepository {
    async fn get_top_recipients(
        &self,
        limit: i64,
        period: Option<String>,
    ) -> RepositoryResult<Vec<RecipientCount>> {
        let since = Self::since(period)?;
        self.kudos_cards.top_recipients(limit, since).await
    }

    async fn get_top_teams(
        &self,
        limit: i64,
        period: Option<String>,
    ) -> RepositoryResult<Vec<TeamCount>> {
        let since = Self::since(period)?;
        self.kudos_cards.top_teams(limit, since).await
    }

    async fn get_trending_categories(
        &self,
        limit: i64,
        period: Option<String>,
    ) -> RepositoryResult<Vec<CategoryCount>> {
        let since = Self::since(period)?;
        self.kudos_cards.trending_categories(limit, since).await
    }

    async fn get_trending_keywords(
        &self,
        limit: i64,
        period: Option<String>,
    ) -> RepositoryResult<Vec<KeywordCount>> {
        let since = Self::since(period)?;
        self.kudos_cards.trending_keywords(limit, since).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_period_means_all_time() {
        assert_eq!(KudosCardAnalyticsRepository::since(None).unwrap(), None);
    }

    #[test]
    fn period_name_is_case_insensitive() {
        let since = KudosCardAnalyticsRepository::since(Some("WEEKLY".to_string()))
            .unwrap()
            .unwrap();
        let days = (Utc::now() - since).num_days();
        assert_eq!(days, 7);
    }

    #[test]
    fn unknown_period_is_rejected() {
        assert!(matches!(
            KudosCardAnalyticsRepository::since(Some("hourly".to_string())),
            Err(RepositoryError::InvalidArgument(_))
        ));
    }
}
