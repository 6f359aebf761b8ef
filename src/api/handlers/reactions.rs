use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::{JsonBody, PathParam};
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::application::reactions::dto::{
    AddReactionRequest, AddReactionResponse, ReactionsResponse, RemoveReactionResponse,
};

#[derive(Debug, Deserialize)]
pub struct ReactionBody {
    pub reaction_type: String,
}

/// GET /api/kudos/:id/reactions
pub async fn get_reactions(
    State(state): State<AppState>,
    JwtAuth(_actor): JwtAuth,
    PathParam(kudos_card_id): PathParam<Uuid>,
) -> Result<Json<ReactionsResponse>, ApiError> {
    let response = state.repos.get_reactions().execute(kudos_card_id).await?;
    Ok(Json(response))
}

/// POST /api/kudos/:id/reactions
pub async fn add_reaction(
    State(state): State<AppState>,
    JwtAuth(actor): JwtAuth,
    PathParam(kudos_card_id): PathParam<Uuid>,
    JsonBody(body): JsonBody<ReactionBody>,
) -> Result<(StatusCode, Json<AddReactionResponse>), ApiError> {
    let response = state
        .repos
        .add_reaction()
        .execute(
            AddReactionRequest {
                kudos_card_id,
                reaction_type: body.reaction_type,
            },
            actor.user_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// DELETE /api/reactions/:id
pub async fn remove_reaction(
    State(state): State<AppState>,
    JwtAuth(actor): JwtAuth,
    PathParam(reaction_id): PathParam<Uuid>,
) -> Result<Json<RemoveReactionResponse>, ApiError> {
    let response = state
        .repos
        .remove_reaction()
        .execute(reaction_id, actor.user_id)
        .await?;

    Ok(Json(response))
}
