use std::sync::Arc;

use super::dto::AnalyticsRequest;
use super::AnalyticsQuery;
use crate::application::errors::UseCaseResult;
use crate::domain::analytics::TeamCount;
use crate::domain::repositories::AnalyticsRepository;

/// Ranks teams by kudos cards attributed to them
pub struct GetTopTeamsUseCase {
    analytics: Arc<dyn AnalyticsRepository>,
}

impl GetTopTeamsUseCase {
    pub fn new(analytics: Arc<dyn AnalyticsRepository>) -> Self {
        Self { analytics }
    }

    pub async fn execute(&self, request: AnalyticsRequest) -> UseCaseResult<Vec<TeamCount>> {
        let query = AnalyticsQuery::validate(request)?;

        Ok(self
            .analytics
            .get_top_teams(query.limit, query.period)
            .await?)
    }
}
