use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::reaction::{Reaction, ReactionCounts, ReactionSnapshot, ReactionType};
use crate::domain::repositories::{ReactionRepository, RepositoryResult};

/// PostgreSQL implementation of ReactionRepository
///
/// A unique index on `(kudos_card_id, user_id, reaction_type)` backs the
/// one-reaction-per-type rule.
pub struct PostgresReactionRepository {
    pool: PgPool,
}

impl PostgresReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ReactionRow {
    id: Uuid,
    kudos_card_id: Uuid,
    user_id: Uuid,
    reaction_type: ReactionType,
    created_at: DateTime<Utc>,
}

impl From<ReactionRow> for Reaction {
    fn from(r: ReactionRow) -> Self {
        Reaction::from_persistence(ReactionSnapshot {
            id: r.id,
            kudos_card_id: r.kudos_card_id,
            user_id: r.user_id,
            reaction_type: r.reaction_type,
            created_at: r.created_at,
        })
    }
}

#[async_trait]
impl ReactionRepository for PostgresReactionRepository {
    async fn add(&self, reaction: &Reaction) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reactions (id, kudos_card_id, user_id, reaction_type, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(reaction.id())
        .bind(reaction.kudos_card_id())
        .bind(reaction.user_id())
        .bind(reaction.reaction_type())
        .bind(reaction.created_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, id: Uuid) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM reactions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Reaction>> {
        let row = sqlx::query_as::<_, ReactionRow>(
            r#"
            SELECT id, kudos_card_id, user_id, reaction_type, created_at
            FROM reactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Reaction::from))
    }

    async fn find_by_kudos_card_id(&self, kudos_card_id: Uuid) -> RepositoryResult<Vec<Reaction>> {
        let rows = sqlx::query_as::<_, ReactionRow>(
            r#"
            SELECT id, kudos_card_id, user_id, reaction_type, created_at
            FROM reactions
            WHERE kudos_card_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(kudos_card_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Reaction::from).collect())
    }

    async fn find_by_user_and_type(
        &self,
        kudos_card_id: Uuid,
        user_id: Uuid,
        reaction_type: ReactionType,
    ) -> RepositoryResult<Option<Reaction>> {
        let row = sqlx::query_as::<_, ReactionRow>(
            r#"
            SELECT id, kudos_card_id, user_id, reaction_type, created_at
            FROM reactions
            WHERE kudos_card_id = $1 AND user_id = $2 AND reaction_type = $3
            "#,
        )
        .bind(kudos_card_id)
        .bind(user_id)
        .bind(reaction_type)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Reaction::from))
    }

    async fn count_by_type(&self, kudos_card_id: Uuid) -> RepositoryResult<ReactionCounts> {
        let rows = sqlx::query_as::<_, (ReactionType, i64)>(
            r#"
            SELECT reaction_type, COUNT(*)
            FROM reactions
            WHERE kudos_card_id = $1
            GROUP BY reaction_type
            "#,
        )
        .bind(kudos_card_id)
        .fetch_all(&self.pool)
        .await?;

        let mut counts = ReactionCounts::default();
        for (reaction_type, count) in rows {
            counts.set(reaction_type, count);
        }
        Ok(counts)
    }
}
