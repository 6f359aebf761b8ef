use std::sync::Arc;

use super::dto::{GetPendingUsersRequest, UserDto, UsersPageResponse};
use crate::application::authorization::{ensure_role, ADMIN_OR_LEAD};
use crate::application::errors::UseCaseResult;
use crate::application::pagination::Page;
use crate::domain::repositories::AdminUserRepository;
use crate::domain::user::Role;

/// Lists users waiting for admin approval
///
/// Restricted to admins and leads.
pub struct GetPendingUsersUseCase {
    users: Arc<dyn AdminUserRepository>,
}

impl GetPendingUsersUseCase {
    pub fn new(users: Arc<dyn AdminUserRepository>) -> Self {
        Self { users }
    }

    pub async fn execute(
        &self,
        request: GetPendingUsersRequest,
        role: Role,
    ) -> UseCaseResult<UsersPageResponse> {
        ensure_role(role, ADMIN_OR_LEAD)?;
        let page = Page::resolve(request.limit, request.offset)?;

        let users = self
            .users
            .find_pending_users(page.limit, page.offset)
            .await?;
        let total = self.users.count_pending_users().await?;

        tracing::debug!(returned = users.len(), total, "listed pending users");

        Ok(UsersPageResponse {
            users: users.iter().map(UserDto::from).collect(),
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::UseCaseError;
    use crate::application::test_support::{sample_user, FakeAdminUserRepository};
    use crate::domain::user::ApprovalStatus;

    fn use_case(repo: &Arc<FakeAdminUserRepository>) -> GetPendingUsersUseCase {
        GetPendingUsersUseCase::new(repo.clone())
    }

    #[tokio::test]
    async fn admin_gets_pending_users_with_total() {
        let users = vec![
            sample_user("Ada", ApprovalStatus::Pending),
            sample_user("Grace", ApprovalStatus::Pending),
        ];
        let repo = Arc::new(FakeAdminUserRepository::with_users(users.clone(), 2));

        let response = use_case(&repo)
            .execute(
                GetPendingUsersRequest {
                    limit: Some(10),
                    offset: Some(0),
                },
                Role::Admin,
            )
            .await
            .unwrap();

        assert_eq!(response.total, 2);
        assert_eq!(response.users.len(), 2);
        assert_eq!(response.users[0], UserDto::from(&users[0]));
        assert_eq!(response.users[1].email, "grace@example.com");
        assert_eq!(*repo.last_page.lock().unwrap(), Some((10, 0)));
    }

    #[tokio::test]
    async fn lead_is_allowed() {
        let repo = Arc::new(FakeAdminUserRepository::default());

        let response = use_case(&repo)
            .execute(GetPendingUsersRequest::default(), Role::Lead)
            .await
            .unwrap();

        assert!(response.users.is_empty());
        assert_eq!(repo.log.count("count_pending_users"), 1);
    }

    #[tokio::test]
    async fn defaults_limit_and_offset() {
        let repo = Arc::new(FakeAdminUserRepository::default());

        use_case(&repo)
            .execute(GetPendingUsersRequest::default(), Role::Admin)
            .await
            .unwrap();

        assert_eq!(*repo.last_page.lock().unwrap(), Some((10, 0)));
    }

    #[tokio::test]
    async fn member_is_rejected_before_repository_access() {
        let repo = Arc::new(FakeAdminUserRepository::default());

        let result = use_case(&repo)
            .execute(GetPendingUsersRequest::default(), Role::Member)
            .await;

        assert!(matches!(
            result,
            Err(UseCaseError::UnauthorizedRole {
                role: Role::Member,
                ..
            })
        ));
        assert!(repo.log.is_empty());
    }

    #[tokio::test]
    async fn zero_limit_is_rejected() {
        let repo = Arc::new(FakeAdminUserRepository::default());

        let result = use_case(&repo)
            .execute(
                GetPendingUsersRequest {
                    limit: Some(0),
                    offset: None,
                },
                Role::Admin,
            )
            .await;

        assert!(matches!(result, Err(UseCaseError::Validation(_))));
        assert!(repo.log.is_empty());
    }
}
