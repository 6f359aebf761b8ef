use std::sync::Arc;

use super::dto::{SearchUsersRequest, UserDto, UsersPageResponse};
use crate::application::authorization::{ensure_role, ADMIN_OR_LEAD};
use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::application::pagination::Page;
use crate::domain::repositories::AdminUserRepository;
use crate::domain::user::{ApprovalStatus, Role, UserSearchFilters};

/// Searches users by text, role, approval status and job title
///
/// Restricted to admins and leads.
pub struct SearchUsersUseCase {
    users: Arc<dyn AdminUserRepository>,
}

impl SearchUsersUseCase {
    pub fn new(users: Arc<dyn AdminUserRepository>) -> Self {
        Self { users }
    }

    pub async fn execute(
        &self,
        request: SearchUsersRequest,
        role: Role,
    ) -> UseCaseResult<UsersPageResponse> {
        ensure_role(role, ADMIN_OR_LEAD)?;
        let filters = Self::filters(request)?;

        let users = self.users.search_users(&filters).await?;
        let total = self.users.count_users(&filters).await?;

        Ok(UsersPageResponse {
            users: users.iter().map(UserDto::from).collect(),
            total,
        })
    }

    fn filters(request: SearchUsersRequest) -> UseCaseResult<UserSearchFilters> {
        let page = Page::resolve(request.limit, request.offset)?;

        let role = request
            .role
            .map(Role::try_from)
            .transpose()
            .map_err(UseCaseError::Validation)?;

        let approval_status = request
            .approval_status
            .as_deref()
            .map(str::parse::<ApprovalStatus>)
            .transpose()
            .map_err(UseCaseError::Validation)?;

        Ok(UserSearchFilters {
            query: non_blank(request.query),
            role,
            approval_status,
            job_title: non_blank(request.job_title),
            limit: page.limit,
            offset: page.offset,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
