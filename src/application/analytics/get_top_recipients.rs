use std::sync::Arc;

use super::dto::AnalyticsRequest;
use super::AnalyticsQuery;
use crate::application::errors::UseCaseResult;
use crate::domain::analytics::RecipientCount;
use crate::domain::repositories::AnalyticsRepository;

/// Ranks employees by kudos cards received
pub struct GetTopRecipientsUseCase {
    analytics: Arc<dyn AnalyticsRepository>,
}

impl GetTopRecipientsUseCase {
    pub fn new(analytics: Arc<dyn AnalyticsRepository>) -> Self {
        Self { analytics }
    }

    pub async fn execute(&self, request: AnalyticsRequest) -> UseCaseResult<Vec<RecipientCount>> {
        let query = AnalyticsQuery::validate(request)?;

        let rows = self
            .analytics
            .get_top_recipients(query.limit, query.period)
            .await?;

        Ok(rows)
    }
}
