use axum::{
    extract::State,
    Json,
};

use crate::api::errors::ApiError;
use crate::api::extract::QueryParams;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::application::admin::dto::{
    GetPendingUsersRequest, SearchUsersRequest, UsersPageResponse,
};

/// List users awaiting approval
///
/// GET /api/admin/users/pending?limit=&offset=
pub async fn get_pending_users(
    State(state): State<AppState>,
    JwtAuth(actor): JwtAuth,
    QueryParams(query): QueryParams<GetPendingUsersRequest>,
) -> Result<Json<UsersPageResponse>, ApiError> {
    let page = state
        .repos
        .get_pending_users()
        .execute(query, actor.role)
        .await?;

    Ok(Json(page))
}

/// Search users by text, role, approval status and job title
///
/// GET /api/admin/users/search?query=&role=&approval_status=&job_title=&limit=&offset=
pub async fn search_users(
    State(state): State<AppState>,
    JwtAuth(actor): JwtAuth,
    QueryParams(query): QueryParams<SearchUsersRequest>,
) -> Result<Json<UsersPageResponse>, ApiError> {
    let page = state.repos.search_users().execute(query, actor.role).await?;

    Ok(Json(page))
}
