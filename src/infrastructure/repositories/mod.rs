// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod kudos_card_analytics_repository;
pub mod postgres_admin_user_repository;
pub mod postgres_comment_repository;
pub mod postgres_kudos_card_repository;
pub mod postgres_reaction_repository;
pub mod postgres_team_repository;

pub use in_memory::{InMemoryStore, KudosCardRecord};
pub use kudos_card_analytics_repository::KudosCardAnalyticsRepository;
pub use postgres_admin_user_repository::PostgresAdminUserRepository;
pub use postgres_comment_repository::PostgresCommentRepository;
pub use postgres_kudos_card_repository::PostgresKudosCardRepository;
pub use postgres_reaction_repository::PostgresReactionRepository;
pub use postgres_team_repository::PostgresTeamRepository;
