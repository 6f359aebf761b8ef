use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::{ApprovalStatus, Role, User};

/// Query parameters for listing users awaiting approval
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetPendingUsersRequest {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for user search
///
/// `role` and `approval_status` arrive as raw values and are validated by
/// the use case.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchUsersRequest {
    pub query: Option<String>,
    pub role: Option<i16>,
    pub approval_status: Option<String>,
    pub job_title: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub job_title: Option<String>,
    pub approval_status: ApprovalStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
            job_title: user.job_title.clone(),
            approval_status: user.approval_status,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

/// One page of users plus the total across all pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersPageResponse {
    pub users: Vec<UserDto>,
    pub total: i64,
}
