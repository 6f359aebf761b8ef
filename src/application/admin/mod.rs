// Admin use cases: reviewing registered users

pub mod dto;
pub mod get_pending_users;
pub mod search_users;

pub use get_pending_users::GetPendingUsersUseCase;
pub use search_users::SearchUsersUseCase;
