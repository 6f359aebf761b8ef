use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::api::handlers::{admin, analytics, comments, health, reactions, teams};
use crate::api::state::AppState;

/// Builds the application router
///
/// Cross-cutting layers (tracing, CORS) are added by the binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Admin routes
        .route("/api/admin/users/pending", get(admin::get_pending_users))
        .route("/api/admin/users/search", get(admin::search_users))
        // Analytics routes
        .route("/api/analytics/top-recipients", get(analytics::top_recipients))
        .route("/api/analytics/top-teams", get(analytics::top_teams))
        .route(
            "/api/analytics/trending-categories",
            get(analytics::trending_categories),
        )
        .route(
            "/api/analytics/trending-keywords",
            get(analytics::trending_keywords),
        )
        // Comment routes
        .route(
            "/api/kudos/:id/comments",
            get(comments::get_comments).post(comments::add_comment),
        )
        .route(
            "/api/comments/:id",
            put(comments::update_comment).delete(comments::delete_comment),
        )
        // Reaction routes
        .route(
            "/api/kudos/:id/reactions",
            get(reactions::get_reactions).post(reactions::add_reaction),
        )
        .route("/api/reactions/:id", delete(reactions::remove_reaction))
        // Team routes
        .route("/api/teams", get(teams::get_teams).post(teams::create_team))
        .route(
            "/api/teams/:id",
            get(teams::get_team)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )
        // Shared state
        .with_state(state)
}
