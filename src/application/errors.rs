use thiserror::Error;
use uuid::Uuid;

use crate::domain::repositories::RepositoryError;
use crate::domain::user::Role;

/// Errors returned by use cases
///
/// The HTTP layer matches on the variant to pick a status code.
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Unauthorized role: {role}. Allowed roles: {}", describe_roles(.allowed))]
    UnauthorizedRole { role: Role, allowed: Vec<Role> },

    #[error("Unauthorized access: {0}")]
    UnauthorizedAccess(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    InvalidPeriod(String),

    #[error("Duplicate reaction: {0}")]
    DuplicateReaction(String),

    #[error("Team {0} is still referenced by kudos cards")]
    TeamInUse(Uuid),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

fn describe_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(|r| format!("{} ({})", r, r.code()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type UseCaseResult<T> = Result<T, UseCaseError>;
