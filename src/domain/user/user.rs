use super::value_objects::{ApprovalStatus, Email, Role};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User as seen by the admin module
///
/// Users are owned by the auth module; this side only reads and filters
/// them, so the record has public fields and no behaviour.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub job_title: Option<String>,
    pub approval_status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_pending(&self) -> bool {
        self.approval_status == ApprovalStatus::Pending
    }
}

/// Filters accepted by user search
///
/// Unset fields do not constrain the result. `query` matches email, first
/// name or last name as a case-insensitive substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearchFilters {
    pub query: Option<String>,
    pub role: Option<Role>,
    pub approval_status: Option<ApprovalStatus>,
    pub job_title: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl UserSearchFilters {
    /// Returns true if `user` satisfies every set filter, ignoring paging
    pub fn matches(&self, user: &User) -> bool {
        if let Some(role) = self.role {
            if user.role != role {
                return false;
            }
        }

        if let Some(status) = self.approval_status {
            if user.approval_status != status {
                return false;
            }
        }

        if let Some(title) = &self.job_title {
            let wanted = title.to_lowercase();
            let matches_title = user
                .job_title
                .as_deref()
                .map(|t| t.to_lowercase() == wanted)
                .unwrap_or(false);
            if !matches_title {
                return false;
            }
        }

        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let haystacks = [
                user.email.as_str().to_lowercase(),
                user.first_name.to_lowercase(),
                user.last_name.to_lowercase(),
            ];
            if !haystacks.iter().any(|h| h.contains(&needle)) {
                return false;
            }
        }

        true
    }
}
