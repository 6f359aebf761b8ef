use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{UseCaseError, UseCaseResult};
use crate::domain::user::Role;

/// Roles allowed to review users and read analytics
pub const ADMIN_OR_LEAD: &[Role] = &[Role::Admin, Role::Lead];

/// Roles allowed to manage teams
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Authenticated user performing a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }
}

/// Fails with `UnauthorizedRole` unless `role` is in `allowed`
pub fn ensure_role(role: Role, allowed: &[Role]) -> UseCaseResult<()> {
    if allowed.contains(&role) {
        return Ok(());
    }

    tracing::warn!(%role, "role not permitted for operation");
    Err(UseCaseError::UnauthorizedRole {
        role,
        allowed: allowed.to_vec(),
    })
}
