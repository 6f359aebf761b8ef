use axum::{
    extract::State,
    Json,
};

use crate::api::errors::ApiError;
use crate::api::extract::QueryParams;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::application::analytics::dto::AnalyticsRequest;
use crate::application::authorization::ADMIN_OR_LEAD;
use crate::application::ensure_role;
use crate::domain::analytics::{CategoryCount, KeywordCount, RecipientCount, TeamCount};

/// GET /api/analytics/top-recipients?limit=&period=
pub async fn top_recipients(
    State(state): State<AppState>,
    JwtAuth(actor): JwtAuth,
    QueryParams(query): QueryParams<AnalyticsRequest>,
) -> Result<Json<Vec<RecipientCount>>, ApiError> {
    ensure_role(actor.role, ADMIN_OR_LEAD)?;
    let rows = state.repos.get_top_recipients().execute(query).await?;
    Ok(Json(rows))
}

/// GET /api/analytics/top-teams?limit=&period=
pub async fn top_teams(
    State(state): State<AppState>,
    JwtAuth(actor): JwtAuth,
    QueryParams(query): QueryParams<AnalyticsRequest>,
) -> Result<Json<Vec<TeamCount>>, ApiError> {
    ensure_role(actor.role, ADMIN_OR_LEAD)?;
    let rows = state.repos.get_top_teams().execute(query).await?;
    Ok(Json(rows))
}

/// GET /api/analytics/trending-categories?limit=&period=
pub async fn trending_categories(
    State(state): State<AppState>,
    JwtAuth(actor): JwtAuth,
    QueryParams(query): QueryParams<AnalyticsRequest>,
) -> Result<Json<Vec<CategoryCount>>, ApiError> {
    ensure_role(actor.role, ADMIN_OR_LEAD)?;
    let rows = state.repos.get_trending_categories().execute(query).await?;
    Ok(Json(rows))
}

/// GET /api/analytics/trending-keywords?limit=&period=
pub async fn trending_keywords(
    State(state): State<AppState>,
    JwtAuth(actor): JwtAuth,
    QueryParams(query): QueryParams<AnalyticsRequest>,
) -> Result<Json<Vec<KeywordCount>>, ApiError> {
    ensure_role(actor.role, ADMIN_OR_LEAD)?;
    let rows = state.repos.get_trending_keywords().execute(query).await?;
    Ok(Json(rows))
}
