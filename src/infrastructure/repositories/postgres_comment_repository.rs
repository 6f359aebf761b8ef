use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::comment::{Comment, CommentSnapshot};
use crate::domain::repositories::{CommentRepository, RepositoryResult};

/// PostgreSQL implementation of CommentRepository
///
/// Deleted comments keep their row with `deleted_at` set and are excluded
/// from listings and counts.
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    kudos_card_id: Uuid,
    user_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<CommentRow> for Comment {
    fn from(r: CommentRow) -> Self {
        Comment::from_persistence(CommentSnapshot {
            id: r.id,
            kudos_card_id: r.kudos_card_id,
            user_id: r.user_id,
            content: r.content,
            created_at: r.created_at,
            updated_at: r.updated_at,
            deleted_at: r.deleted_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn add(&self, comment: &Comment) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (
                id, kudos_card_id, user_id, content, created_at, updated_at, deleted_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(comment.id())
        .bind(comment.kudos_card_id())
        .bind(comment.user_id())
        .bind(comment.content())
        .bind(comment.created_at())
        .bind(comment.updated_at())
        .bind(comment.deleted_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, comment: &Comment) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            UPDATE comments
            SET content = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(comment.id())
        .bind(comment.content())
        .bind(comment.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn soft_delete(&self, comment: &Comment) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            UPDATE comments
            SET deleted_at = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(comment.id())
        .bind(comment.deleted_at())
        .bind(comment.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, kudos_card_id, user_id, content, created_at, updated_at, deleted_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Comment::from))
    }

    async fn find_by_kudos_card_id(
        &self,
        kudos_card_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> RepositoryResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, kudos_card_id, user_id, content, created_at, updated_at, deleted_at
            FROM comments
            WHERE kudos_card_id = $1 AND deleted_at IS NULL
            ORDER BY created_at ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(kudos_card_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn count_by_kudos_card_id(&self, kudos_card_id: Uuid) -> RepositoryResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM comments WHERE kudos_card_id = $1 AND deleted_at IS NULL",
        )
        .bind(kudos_card_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
