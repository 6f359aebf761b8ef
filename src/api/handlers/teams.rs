use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::{JsonBody, PathParam};
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::application::authorization::ADMIN_ONLY;
use crate::application::ensure_role;
use crate::application::teams::dto::{
    CreateTeamRequest, DeleteTeamResponse, TeamDto, UpdateTeamRequest,
};

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    JwtAuth(actor): JwtAuth,
    JsonBody(req): JsonBody<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamDto>), ApiError> {
    ensure_role(actor.role, ADMIN_ONLY)?;
    let team = state.repos.create_team().execute(req).await?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// List all teams ordered by name
///
/// GET /api/teams
pub async fn get_teams(
    State(state): State<AppState>,
    JwtAuth(_actor): JwtAuth,
) -> Result<Json<Vec<TeamDto>>, ApiError> {
    let teams = state.repos.get_teams().execute().await?;

    Ok(Json(teams))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    JwtAuth(_actor): JwtAuth,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<TeamDto>, ApiError> {
    let team = state.repos.get_team().execute(id).await?;

    Ok(Json(team))
}

/// Rename a team
///
/// PUT /api/teams/:id
pub async fn update_team(
    State(state): State<AppState>,
    JwtAuth(actor): JwtAuth,
    PathParam(id): PathParam<Uuid>,
    JsonBody(req): JsonBody<UpdateTeamRequest>,
) -> Result<Json<TeamDto>, ApiError> {
    ensure_role(actor.role, ADMIN_ONLY)?;
    let team = state.repos.update_team().execute(id, req).await?;

    Ok(Json(team))
}

/// Delete a team no kudos card refers to
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    JwtAuth(actor): JwtAuth,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<DeleteTeamResponse>, ApiError> {
    ensure_role(actor.role, ADMIN_ONLY)?;
    let response = state.repos.delete_team().execute(id).await?;

    Ok(Json(response))
}
