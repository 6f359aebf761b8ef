// Analytics use cases
//
// Each one validates the limit and optional period, then hands the
// original period string to the analytics repository. Ranking happens in
// the repository.

pub mod dto;
pub mod get_top_recipients;
pub mod get_top_teams;
pub mod get_trending_categories;
pub mod get_trending_keywords;

pub use get_top_recipients::GetTopRecipientsUseCase;
pub use get_top_teams::GetTopTeamsUseCase;
pub use get_trending_categories::GetTrendingCategoriesUseCase;
pub use get_trending_keywords::GetTrendingKeywordsUseCase;

use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::application::pagination::resolve_limit;
use crate::domain::analytics::Period;
use dto::AnalyticsRequest;

/// Validated analytics query: the limit plus the period exactly as supplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnalyticsQuery {
    pub limit: i64,
    pub period: Option<String>,
}

impl AnalyticsQuery {
    pub(crate) fn validate(request: AnalyticsRequest) -> UseCaseResult<Self> {
        let limit = resolve_limit(request.limit)?;

        if let Some(period) = &request.period {
            Period::parse(period).map_err(UseCaseError::InvalidPeriod)?;
        }

        Ok(Self {
            limit,
            period: request.period,
        })
    }
}
