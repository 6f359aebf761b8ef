use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::user::{User, UserSearchFilters};

/// Read-only access to users for the admin module
#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    /// Users awaiting approval, oldest registration first
    async fn find_pending_users(&self, limit: i64, offset: i64) -> RepositoryResult<Vec<User>>;

    /// Number of users awaiting approval
    async fn count_pending_users(&self) -> RepositoryResult<i64>;

    /// One page of users matching `filters`
    async fn search_users(&self, filters: &UserSearchFilters) -> RepositoryResult<Vec<User>>;

    /// Number of users matching `filters`, ignoring paging
    async fn count_users(&self, filters: &UserSearchFilters) -> RepositoryResult<i64>;
}
