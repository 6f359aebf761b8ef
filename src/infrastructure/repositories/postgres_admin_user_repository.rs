use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::{AdminUserRepository, RepositoryError, RepositoryResult};
use crate::domain::user::{ApprovalStatus, Email, Role, User, UserSearchFilters};

/// PostgreSQL implementation of AdminUserRepository
pub struct PostgresAdminUserRepository {
    pool: PgPool,
}

impl PostgresAdminUserRepository {
    /// Creates a new PostgresAdminUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    first_name: String,
    last_name: String,
    role: Role,
    job_title: Option<String>,
    approval_status: ApprovalStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(r: UserRow) -> Result<Self, Self::Error> {
        let email = Email::new(&r.email)
            .map_err(|e| RepositoryError::Corrupt(format!("Invalid email from database: {}", e)))?;

        Ok(User {
            id: r.id,
            email,
            first_name: r.first_name,
            last_name: r.last_name,
            role: r.role,
            job_title: r.job_title,
            approval_status: r.approval_status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

fn into_users(rows: Vec<UserRow>) -> RepositoryResult<Vec<User>> {
    rows.into_iter().map(User::try_from).collect()
}

/// Wraps a search term for ILIKE, escaping its wildcards
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

const SEARCH_FILTER: &str = r#"
    WHERE ($1::text IS NULL
           OR email ILIKE $1 OR first_name ILIKE $1 OR last_name ILIKE $1)
      AND ($2::smallint IS NULL OR role = $2)
      AND ($3::approval_status IS NULL OR approval_status = $3)
      AND ($4::text IS NULL OR LOWER(job_title) = LOWER($4))
"#;

#[async_trait]
impl AdminUserRepository for PostgresAdminUserRepository {
    async fn find_pending_users(&self, limit: i64, offset: i64) -> RepositoryResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, first_name, last_name, role, job_title,
                   approval_status, created_at, updated_at
            FROM users
            WHERE approval_status = 'PENDING'
            ORDER BY created_at ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        into_users(rows)
    }

    async fn count_pending_users(&self) -> RepositoryResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE approval_status = 'PENDING'")
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn search_users(&self, filters: &UserSearchFilters) -> RepositoryResult<Vec<User>> {
        let sql = format!(
            r#"
            SELECT id, email, first_name, last_name, role, job_title,
                   approval_status, created_at, updated_at
            FROM users
            {}
            ORDER BY created_at DESC
            LIMIT $5 OFFSET $6
            "#,
            SEARCH_FILTER
        );

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(filters.query.as_deref().map(like_pattern))
            .bind(filters.role)
            .bind(filters.approval_status)
            .bind(filters.job_title.as_deref())
            .bind(filters.limit)
            .bind(filters.offset)
            .fetch_all(&self.pool)
            .await?;

        into_users(rows)
    }

    async fn count_users(&self, filters: &UserSearchFilters) -> RepositoryResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM users {}", SEARCH_FILTER);

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(filters.query.as_deref().map(like_pattern))
            .bind(filters.role)
            .bind(filters.approval_status)
            .bind(filters.job_title.as_deref())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
