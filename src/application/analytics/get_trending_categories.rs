use std::sync::Arc;

use super::dto::AnalyticsRequest;
use super::AnalyticsQuery;
use crate::application::errors::UseCaseResult;
use crate::domain::analytics::CategoryCount;
use crate::domain::repositories::AnalyticsRepository;

/// Most used kudos categories
pub struct GetTrendingCategoriesUseCase {
    analytics: Arc<dyn AnalyticsRepository>,
}

impl GetTrendingCategoriesUseCase {
    pub fn new(analytics: Arc<dyn AnalyticsRepository>) -> Self {
        Self { analytics }
    }

    pub async fn execute(&self, request: AnalyticsRequest) -> UseCaseResult<Vec<CategoryCount>> {
        let query = AnalyticsQuery::validate(request)?;

        Ok(self
            .analytics
            .get_trending_categories(query.limit, query.period)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::UseCaseError;
    use crate::application::test_support::FakeAnalyticsRepository;

    #[tokio::test]
    async fn defaults_limit_to_ten() {
        let repo = Arc::new(FakeAnalyticsRepository {
            categories: vec![CategoryCount {
                category: "teamwork".to_string(),
                count: 3,
            }],
            ..Default::default()
        });

        let result = GetTrendingCategoriesUseCase::new(repo.clone())
            .execute(AnalyticsRequest::default())
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(
            repo.calls(),
            vec![("get_trending_categories".to_string(), 10, None)]
        );
    }

    #[tokio::test]
    async fn invalid_period_skips_repository() {
        let repo = Arc::new(FakeAnalyticsRepository::default());

        let result = GetTrendingCategoriesUseCase::new(repo.clone())
            .execute(AnalyticsRequest::new(None, Some("decade")))
            .await;

        assert!(matches!(result, Err(UseCaseError::InvalidPeriod(_))));
        assert!(repo.calls().is_empty());
    }
}
