use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::analytics::{
    CategoryCount, KeywordCount, RecipientCount, TeamCount, MIN_KEYWORD_LENGTH, STOP_WORDS,
};
use crate::domain::repositories::{KudosCardRepository, RepositoryResult};

/// PostgreSQL access to the kudos cards table
///
/// Rankings order by count descending and break ties alphabetically.
pub struct PostgresKudosCardRepository {
    pool: PgPool,
}

impl PostgresKudosCardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KudosCardRepository for PostgresKudosCardRepository {
    async fn exists(&self, id: Uuid) -> RepositoryResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM kudos_cards WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn top_recipients(
        &self,
        limit: i64,
        since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<RecipientCount>> {
        let rows = sqlx::query_as::<_, RecipientCount>(
            r#"
            SELECT TRIM(CONCAT_WS(' ', u.first_name, u.last_name)) AS recipient_name,
                   COUNT(*) AS count
            FROM kudos_cards k
            JOIN users u ON u.id = k.recipient_id
            WHERE ($2::timestamptz IS NULL OR k.created_at >= $2)
            GROUP BY u.id, u.first_name, u.last_name
            ORDER BY count DESC, recipient_name ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn top_teams(
        &self,
        limit: i64,
        since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<TeamCount>> {
        let rows = sqlx::query_as::<_, TeamCount>(
            r#"
            SELECT t.name AS team_name, COUNT(*) AS count
            FROM kudos_cards k
            JOIN teams t ON t.id = k.team_id
            WHERE ($2::timestamptz IS NULL OR k.created_at >= $2)
            GROUP BY t.id, t.name
            ORDER BY count DESC, team_name ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn trending_categories(
        &self,
        limit: i64,
        since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<CategoryCount>> {
        let rows = sqlx::query_as::<_, CategoryCount>(
            r#"
            SELECT k.category AS category, COUNT(*) AS count
            FROM kudos_cards k
            WHERE ($2::timestamptz IS NULL OR k.created_at >= $2)
            GROUP BY k.category
            ORDER BY count DESC, category ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn trending_keywords(
        &self,
        limit: i64,
        since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<KeywordCount>> {
        let stop_words: Vec<String> = STOP_WORDS.iter().map(|w| w.to_string()).collect();

        // Same tokenisation as `extract_keywords`
        let rows = sqlx::query_as::<_, KeywordCount>(
            r#"
            SELECT word AS keyword, COUNT(*) AS count
            FROM kudos_cards k,
                 LATERAL regexp_split_to_table(LOWER(k.message), '[^a-z0-9]+') AS word
            WHERE ($2::timestamptz IS NULL OR k.created_at >= $2)
              AND LENGTH(word) >= $3
              AND NOT (word = ANY($4))
            GROUP BY word
            ORDER BY count DESC, keyword ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .bind(since)
        .bind(MIN_KEYWORD_LENGTH as i32)
        .bind(stop_words)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
