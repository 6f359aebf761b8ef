// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod admin_user_repository;
pub mod analytics_repository;
pub mod comment_repository;
pub mod errors;
pub mod kudos_card_repository;
pub mod reaction_repository;
pub mod team_repository;

pub use admin_user_repository::AdminUserRepository;
pub use analytics_repository::AnalyticsRepository;
pub use comment_repository::CommentRepository;
pub use errors::{RepositoryError, RepositoryResult};
pub use kudos_card_repository::KudosCardRepository;
pub use reaction_repository::ReactionRepository;
pub use team_repository::TeamRepository;
