use std::sync::Arc;

use super::dto::AnalyticsRequest;
use super::AnalyticsQuery;
use crate::application::errors::UseCaseResult;
use crate::domain::analytics::KeywordCount;
use crate::domain::repositories::AnalyticsRepository;

/// Most frequent words in kudos messages
pub struct GetTrendingKeywordsUseCase {
    analytics: Arc<dyn AnalyticsRepository>,
}

impl GetTrendingKeywordsUseCase {
    pub fn new(analytics: Arc<dyn AnalyticsRepository>) -> Self {
        Self { analytics }
    }

    pub async fn execute(&self, request: AnalyticsRequest) -> UseCaseResult<Vec<KeywordCount>> {
        let query = AnalyticsQuery::validate(request)?;

        Ok(self
            .analytics
            .get_trending_keywords(query.limit, query.period)
            .await?)
    }
}
