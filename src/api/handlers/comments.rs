use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::{JsonBody, PathParam, QueryParams};
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::application::comments::dto::{
    AddCommentRequest, AddCommentResponse, CommentDto, CommentsPageResponse,
    DeleteCommentResponse, GetCommentsRequest, UpdateCommentRequest,
};

/// Request body for adding or editing a comment
#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// List live comments on a kudos card
///
/// GET /api/kudos/:id/comments?limit=&offset=
pub async fn get_comments(
    State(state): State<AppState>,
    JwtAuth(_actor): JwtAuth,
    PathParam(kudos_card_id): PathParam<Uuid>,
    QueryParams(page): QueryParams<PageQuery>,
) -> Result<Json<CommentsPageResponse>, ApiError> {
    let response = state
        .repos
        .get_comments()
        .execute(GetCommentsRequest {
            kudos_card_id,
            limit: page.limit,
            offset: page.offset,
        })
        .await?;

    Ok(Json(response))
}

/// Comment on a kudos card as the authenticated user
///
/// POST /api/kudos/:id/comments
pub async fn add_comment(
    State(state): State<AppState>,
    JwtAuth(actor): JwtAuth,
    PathParam(kudos_card_id): PathParam<Uuid>,
    JsonBody(body): JsonBody<CommentBody>,
) -> Result<(StatusCode, Json<AddCommentResponse>), ApiError> {
    let response = state
        .repos
        .add_comment()
        .execute(
            AddCommentRequest {
                kudos_card_id,
                content: body.content,
            },
            actor.user_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Edit one of the caller's own comments
///
/// PUT /api/comments/:id
pub async fn update_comment(
    State(state): State<AppState>,
    JwtAuth(actor): JwtAuth,
    PathParam(comment_id): PathParam<Uuid>,
    JsonBody(body): JsonBody<CommentBody>,
) -> Result<Json<CommentDto>, ApiError> {
    let comment = state
        .repos
        .update_comment()
        .execute(
            UpdateCommentRequest {
                comment_id,
                content: body.content,
            },
            actor.user_id,
        )
        .await?;

    Ok(Json(comment))
}

/// Soft-delete one of the caller's own comments
///
/// DELETE /api/comments/:id
pub async fn delete_comment(
    State(state): State<AppState>,
    JwtAuth(actor): JwtAuth,
    PathParam(comment_id): PathParam<Uuid>,
) -> Result<Json<DeleteCommentResponse>, ApiError> {
    let response = state
        .repos
        .delete_comment()
        .execute(comment_id, actor.user_id)
        .await?;

    Ok(Json(response))
}
