// Composition root
// Wires repository adapters into use cases

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::admin::{GetPendingUsersUseCase, SearchUsersUseCase};
use crate::application::analytics::{
    GetTopRecipientsUseCase, GetTopTeamsUseCase, GetTrendingCategoriesUseCase,
    GetTrendingKeywordsUseCase,
};
use crate::application::comments::{
    AddCommentUseCase, DeleteCommentUseCase, GetCommentsUseCase, UpdateCommentUseCase,
};
use crate::application::reactions::{
    AddReactionUseCase, GetReactionsUseCase, RemoveReactionUseCase,
};
use crate::application::teams::{
    CreateTeamUseCase, DeleteTeamUseCase, GetTeamUseCase, GetTeamsUseCase, UpdateTeamUseCase,
};
use crate::domain::repositories::{
    AdminUserRepository, AnalyticsRepository, CommentRepository, KudosCardRepository,
    ReactionRepository, TeamRepository,
};
use crate::infrastructure::repositories::{
    InMemoryStore, KudosCardAnalyticsRepository, PostgresAdminUserRepository,
    PostgresCommentRepository, PostgresKudosCardRepository, PostgresReactionRepository,
    PostgresTeamRepository,
};

/// Shared repository handles, one per port
///
/// Cloning is cheap; every field is an `Arc`.
#[derive(Clone)]
pub struct Repositories {
    pub teams: Arc<dyn TeamRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub reactions: Arc<dyn ReactionRepository>,
    pub admin_users: Arc<dyn AdminUserRepository>,
    pub kudos_cards: Arc<dyn KudosCardRepository>,
    pub analytics: Arc<dyn AnalyticsRepository>,
}

impl Repositories {
    /// Builds PostgreSQL-backed repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        let kudos_cards: Arc<dyn KudosCardRepository> =
            Arc::new(PostgresKudosCardRepository::new(pool.clone()));

        Self {
            teams: Arc::new(PostgresTeamRepository::new(pool.clone())),
            comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
            reactions: Arc::new(PostgresReactionRepository::new(pool.clone())),
            admin_users: Arc::new(PostgresAdminUserRepository::new(pool)),
            analytics: Arc::new(KudosCardAnalyticsRepository::new(kudos_cards.clone())),
            kudos_cards,
        }
    }

    /// Builds repositories that all read and write `store`
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        let kudos_cards: Arc<dyn KudosCardRepository> = store.clone();

        Self {
            teams: store.clone(),
            comments: store.clone(),
            reactions: store.clone(),
            admin_users: store,
            analytics: Arc::new(KudosCardAnalyticsRepository::new(kudos_cards.clone())),
            kudos_cards,
        }
    }

    pub fn get_pending_users(&self) -> GetPendingUsersUseCase {
        GetPendingUsersUseCase::new(self.admin_users.clone())
    }

    pub fn search_users(&self) -> SearchUsersUseCase {
        SearchUsersUseCase::new(self.admin_users.clone())
    }

    pub fn get_top_recipients(&self) -> GetTopRecipientsUseCase {
        GetTopRecipientsUseCase::new(self.analytics.clone())
    }

    pub fn get_top_teams(&self) -> GetTopTeamsUseCase {
        GetTopTeamsUseCase::new(self.analytics.clone())
    }

    pub fn get_trending_categories(&self) -> GetTrendingCategoriesUseCase {
        GetTrendingCategoriesUseCase::new(self.analytics.clone())
    }

    pub fn get_trending_keywords(&self) -> GetTrendingKeywordsUseCase {
        GetTrendingKeywordsUseCase::new(self.analytics.clone())
    }

    pub fn add_comment(&self) -> AddCommentUseCase {
        AddCommentUseCase::new(self.comments.clone(), self.kudos_cards.clone())
    }

    pub fn update_comment(&self) -> UpdateCommentUseCase {
        UpdateCommentUseCase::new(self.comments.clone())
    }

    pub fn delete_comment(&self) -> DeleteCommentUseCase {
        DeleteCommentUseCase::new(self.comments.clone())
    }

    pub fn get_comments(&self) -> GetCommentsUseCase {
        GetCommentsUseCase::new(self.comments.clone(), self.kudos_cards.clone())
    }

    pub fn add_reaction(&self) -> AddReactionUseCase {
        AddReactionUseCase::new(self.reactions.clone(), self.kudos_cards.clone())
    }

    pub fn remove_reaction(&self) -> RemoveReactionUseCase {
        RemoveReactionUseCase::new(self.reactions.clone())
    }

    pub fn get_reactions(&self) -> GetReactionsUseCase {
        GetReactionsUseCase::new(self.reactions.clone(), self.kudos_cards.clone())
    }

    pub fn create_team(&self) -> CreateTeamUseCase {
        CreateTeamUseCase::new(self.teams.clone())
    }

    pub fn get_team(&self) -> GetTeamUseCase {
        GetTeamUseCase::new(self.teams.clone())
    }

    pub fn get_teams(&self) -> GetTeamsUseCase {
        GetTeamsUseCase::new(self.teams.clone())
    }

    pub fn update_team(&self) -> UpdateTeamUseCase {
        UpdateTeamUseCase::new(self.teams.clone())
    }

    pub fn delete_team(&self) -> DeleteTeamUseCase {
        DeleteTeamUseCase::new(self.teams.clone())
    }
}
