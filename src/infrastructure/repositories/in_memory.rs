use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::analytics::{
    extract_keywords, CategoryCount, KeywordCount, RecipientCount, TeamCount,
};
use crate::domain::comment::Comment;
use crate::domain::reaction::{Reaction, ReactionCounts, ReactionType};
use crate::domain::repositories::{
    AdminUserRepository, CommentRepository, KudosCardRepository, ReactionRepository,
    RepositoryError, RepositoryResult, TeamRepository,
};
use crate::domain::team::Team;
use crate::domain::user::{User, UserSearchFilters};

/// Kudos card as seen by the analytics queries
///
/// Cards are written by the kudos module; the store only needs enough of
/// them to answer existence checks and rankings.
#[derive(Debug, Clone)]
pub struct KudosCardRecord {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub team_id: Option<Uuid>,
    pub category: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Default)]
struct StoreData {
    users: HashMap<Uuid, User>,
    teams: HashMap<Uuid, Team>,
    kudos_cards: HashMap<Uuid, KudosCardRecord>,
    comments: HashMap<Uuid, Comment>,
    reactions: HashMap<Uuid, Reaction>,
}

impl StoreData {
    fn cards_since(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> impl Iterator<Item = &KudosCardRecord> {
        self.kudos_cards
            .values()
            .filter(move |card| since.map_or(true, |s| card.created_at >= s))
    }
}

/// In-memory implementation of every repository trait
///
/// Used with `STORAGE_BACKEND=memory` and by the HTTP tests. Enforces the
/// same uniqueness and reference rules as the SQL schema.
#[derive(Default)]
pub struct InMemoryStore {
    data: RwLock<StoreData>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed_user(&self, user: User) {
        let mut data = self.data.write().await;
        data.users.insert(user.id, user);
    }

    pub async fn seed_kudos_card(&self, card: KudosCardRecord) {
        let mut data = self.data.write().await;
        data.kudos_cards.insert(card.id, card);
    }
}

/// Sorts by count descending, then name, and keeps the first `limit` entries
fn rank(counts: HashMap<String, i64>, limit: i64) -> Vec<(String, i64)> {
    let labeled = counts
        .into_iter()
        .map(|(name, count)| (name.clone(), (name, count)))
        .collect();
    rank_labeled(labeled, limit)
}

/// Like `rank`, for groups keyed by id that carry a display name
///
/// Entities sharing a name stay separate rows, matching the SQL `GROUP BY id`.
fn rank_labeled<K>(counts: HashMap<K, (String, i64)>, limit: i64) -> Vec<(String, i64)> {
    let mut ranked: Vec<(String, i64)> = counts.into_values().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(usize::try_from(limit).unwrap_or(0));
    ranked
}

fn page<T>(items: Vec<T>, limit: i64, offset: i64) -> Vec<T> {
    let offset = usize::try_from(offset).unwrap_or(0);
    let limit = usize::try_from(limit).unwrap_or(0);
    items.into_iter().skip(offset).take(limit).collect()
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        let data = self.data.read().await;
        let mut teams: Vec<Team> = data.teams.values().cloned().collect();
        teams.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(teams)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        let data = self.data.read().await;
        Ok(data.teams.get(&id).cloned())
    }

    async fn create(&self, team: &Team) -> RepositoryResult<()> {
        let mut data = self.data.write().await;
        if data.teams.contains_key(&team.id()) {
            return Err(RepositoryError::Duplicate(format!("team {}", team.id())));
        }
        data.teams.insert(team.id(), team.clone());
        Ok(())
    }

    async fn update(&self, team: &Team) -> RepositoryResult<()> {
        let mut data = self.data.write().await;
        if let Some(existing) = data.teams.get_mut(&team.id()) {
            *existing = team.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let mut data = self.data.write().await;
        if data.kudos_cards.values().any(|c| c.team_id == Some(id)) {
            return Err(RepositoryError::TeamInUse(id));
        }
        data.teams.remove(&id);
        debug!("Removed team {} from memory store", id);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn add(&self, comment: &Comment) -> RepositoryResult<()> {
        let mut data = self.data.write().await;
        data.comments.insert(comment.id(), comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> RepositoryResult<()> {
        let mut data = self.data.write().await;
        if let Some(existing) = data.comments.get_mut(&comment.id()) {
            *existing = comment.clone();
        }
        Ok(())
    }

    async fn soft_delete(&self, comment: &Comment) -> RepositoryResult<()> {
        let mut data = self.data.write().await;
        if let Some(existing) = data.comments.get_mut(&comment.id()) {
            *existing = comment.clone();
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Comment>> {
        let data = self.data.read().await;
        Ok(data.comments.get(&id).cloned())
    }

    async fn find_by_kudos_card_id(
        &self,
        kudos_card_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> RepositoryResult<Vec<Comment>> {
        let data = self.data.read().await;
        let mut comments: Vec<Comment> = data
            .comments
            .values()
            .filter(|c| c.kudos_card_id() == kudos_card_id && !c.is_deleted())
            .cloned()
            .collect();
        comments.sort_by_key(|c| (c.created_at(), c.id()));
        Ok(page(comments, limit, offset))
    }

    async fn count_by_kudos_card_id(&self, kudos_card_id: Uuid) -> RepositoryResult<i64> {
        let data = self.data.read().await;
        let count = data
            .comments
            .values()
            .filter(|c| c.kudos_card_id() == kudos_card_id && !c.is_deleted())
            .count();
        Ok(count as i64)
    }
}

#[async_trait]
impl ReactionRepository for InMemoryStore {
    async fn add(&self, reaction: &Reaction) -> RepositoryResult<()> {
        let mut data = self.data.write().await;
        let duplicate = data.reactions.values().any(|r| {
            r.kudos_card_id() == reaction.kudos_card_id()
                && r.user_id() == reaction.user_id()
                && r.reaction_type() == reaction.reaction_type()
        });
        if duplicate {
            return Err(RepositoryError::Duplicate(format!(
                "reaction {} on kudos card {}",
                reaction.reaction_type(),
                reaction.kudos_card_id()
            )));
        }
        data.reactions.insert(reaction.id(), reaction.clone());
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> RepositoryResult<()> {
        let mut data = self.data.write().await;
        data.reactions.remove(&id);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Reaction>> {
        let data = self.data.read().await;
        Ok(data.reactions.get(&id).cloned())
    }

    async fn find_by_kudos_card_id(&self, kudos_card_id: Uuid) -> RepositoryResult<Vec<Reaction>> {
        let data = self.data.read().await;
        let mut reactions: Vec<Reaction> = data
            .reactions
            .values()
            .filter(|r| r.kudos_card_id() == kudos_card_id)
            .cloned()
            .collect();
        reactions.sort_by_key(|r| (r.created_at(), r.id()));
        Ok(reactions)
    }

    async fn find_by_user_and_type(
        &self,
        kudos_card_id: Uuid,
        user_id: Uuid,
        reaction_type: ReactionType,
    ) -> RepositoryResult<Option<Reaction>> {
        let data = self.data.read().await;
        Ok(data
            .reactions
            .values()
            .find(|r| {
                r.kudos_card_id() == kudos_card_id
                    && r.user_id() == user_id
                    && r.reaction_type() == reaction_type
            })
            .cloned())
    }

    async fn count_by_type(&self, kudos_card_id: Uuid) -> RepositoryResult<ReactionCounts> {
        let data = self.data.read().await;
        Ok(data
            .reactions
            .values()
            .filter(|r| r.kudos_card_id() == kudos_card_id)
            .map(|r| r.reaction_type())
            .collect())
    }
}

#[async_trait]
impl AdminUserRepository for InMemoryStore {
    async fn find_pending_users(&self, limit: i64, offset: i64) -> RepositoryResult<Vec<User>> {
        let data = self.data.read().await;
        let mut users: Vec<User> = data
            .users
            .values()
            .filter(|u| u.is_pending())
            .cloned()
            .collect();
        users.sort_by_key(|u| (u.created_at, u.id));
        Ok(page(users, limit, offset))
    }

    async fn count_pending_users(&self) -> RepositoryResult<i64> {
        let data = self.data.read().await;
        Ok(data.users.values().filter(|u| u.is_pending()).count() as i64)
    }

    async fn search_users(&self, filters: &UserSearchFilters) -> RepositoryResult<Vec<User>> {
        let data = self.data.read().await;
        let mut users: Vec<User> = data
            .users
            .values()
            .filter(|u| filters.matches(u))
            .cloned()
            .collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(page(users, filters.limit, filters.offset))
    }

    async fn count_users(&self, filters: &UserSearchFilters) -> RepositoryResult<i64> {
        let data = self.data.read().await;
        Ok(data.users.values().filter(|u| filters.matches(u)).count() as i64)
    }
}

#[async_trait]
impl KudosCardRepository for InMemoryStore {
    async fn exists(&self, id: Uuid) -> RepositoryResult<bool> {
        let data = self.data.read().await;
        Ok(data.kudos_cards.contains_key(&id))
    }

    async fn top_recipients(
        &self,
        limit: i64,
        since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<RecipientCount>> {
        let data = self.data.read().await;
        let mut counts = HashMap::new();
        for card in data.cards_since(since) {
            // Cards whose recipient is unknown drop out, as with the SQL join
            if let Some(user) = data.users.get(&card.recipient_id) {
                counts
                    .entry(user.id)
                    .or_insert_with(|| (user.full_name(), 0))
                    .1 += 1;
            }
        }

        Ok(rank_labeled(counts, limit)
            .into_iter()
            .map(|(recipient_name, count)| RecipientCount {
                recipient_name,
                count,
            })
            .collect())
    }

    async fn top_teams(
        &self,
        limit: i64,
        since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<TeamCount>> {
        let data = self.data.read().await;
        let mut counts = HashMap::new();
        for card in data.cards_since(since) {
            if let Some(team) = card.team_id.and_then(|id| data.teams.get(&id)) {
                counts
                    .entry(team.id())
                    .or_insert_with(|| (team.name().to_string(), 0))
                    .1 += 1;
            }
        }

        Ok(rank_labeled(counts, limit)
            .into_iter()
            .map(|(team_name, count)| TeamCount { team_name, count })
            .collect())
    }

    async fn trending_categories(
        &self,
        limit: i64,
        since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<CategoryCount>> {
        let data = self.data.read().await;
        let mut counts = HashMap::new();
        for card in data.cards_since(since) {
            *counts.entry(card.category.clone()).or_insert(0) += 1;
        }

        Ok(rank(counts, limit)
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect())
    }

    async fn trending_keywords(
        &self,
        limit: i64,
        since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<KeywordCount>> {
        let data = self.data.read().await;
        let mut counts = HashMap::new();
        for card in data.cards_since(since) {
            for keyword in extract_keywords(&card.message) {
                *counts.entry(keyword).or_insert(0) += 1;
            }
        }

        Ok(rank(counts, limit)
            .into_iter()
            .map(|(keyword, count)| KeywordCount { keyword, count })
            .collect())
    }
}
