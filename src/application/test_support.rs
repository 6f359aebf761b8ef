// Recording repository fakes for use case tests
//
// Each fake keeps its rows behind a std Mutex and logs every call by name so
// tests can assert which repository methods ran.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::analytics::{CategoryCount, KeywordCount, RecipientCount, TeamCount};
use crate::domain::comment::Comment;
use crate::domain::reaction::{Reaction, ReactionCounts, ReactionType};
use crate::domain::repositories::{
    AdminUserRepository, AnalyticsRepository, CommentRepository, KudosCardRepository,
    ReactionRepository, RepositoryError, RepositoryResult, TeamRepository,
};
use crate::domain::team::Team;
use crate::domain::user::{ApprovalStatus, Email, Role, User, UserSearchFilters};

#[derive(Default)]
pub struct CallLog(Mutex<Vec<String>>);

impl CallLog {
    pub fn record(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|c| *c == name).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

pub fn sample_user(first_name: &str, status: ApprovalStatus) -> User {
    User {
        id: Uuid::new_v4(),
        email: Email::new(format!("{}@example.com", first_name.to_lowercase())).unwrap(),
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        role: Role::Member,
        job_title: Some("Engineer".to_string()),
        approval_status: status,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// ===== Admin users =====

#[derive(Default)]
pub struct FakeAdminUserRepository {
    pub users: Vec<User>,
    pub total: i64,
    pub log: CallLog,
    pub last_page: Mutex<Option<(i64, i64)>>,
    pub last_filters: Mutex<Option<UserSearchFilters>>,
}

impl FakeAdminUserRepository {
    pub fn with_users(users: Vec<User>, total: i64) -> Self {
        Self {
            users,
            total,
            ..Default::default()
        }
    }
}

#[async_trait]
impl AdminUserRepository for FakeAdminUserRepository {
    async fn find_pending_users(&self, limit: i64, offset: i64) -> RepositoryResult<Vec<User>> {
        self.log.record("find_pending_users");
        *self.last_page.lock().unwrap() = Some((limit, offset));
        Ok(self.users.clone())
    }

    async fn count_pending_users(&self) -> RepositoryResult<i64> {
        self.log.record("count_pending_users");
        Ok(self.total)
    }

    async fn search_users(&self, filters: &UserSearchFilters) -> RepositoryResult<Vec<User>> {
        self.log.record("search_users");
        *self.last_filters.lock().unwrap() = Some(filters.clone());
        Ok(self.users.clone())
    }

    async fn count_users(&self, _filters: &UserSearchFilters) -> RepositoryResult<i64> {
        self.log.record("count_users");
        Ok(self.total)
    }
}

// ===== Analytics =====

#[derive(Default)]
pub struct FakeAnalyticsRepository {
    pub recipients: Vec<RecipientCount>,
    pub teams: Vec<TeamCount>,
    pub categories: Vec<CategoryCount>,
    pub keywords: Vec<KeywordCount>,
    pub fail: bool,
    pub calls: Mutex<Vec<(String, i64, Option<String>)>>,
}

impl FakeAnalyticsRepository {
    fn record(&self, name: &str, limit: i64, period: Option<String>) -> RepositoryResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), limit, period));
        if self.fail {
            return Err(RepositoryError::Database("connection reset".to_string()));
        }
        Ok(())
    }

    pub fn calls(&self) -> Vec<(String, i64, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalyticsRepository for FakeAnalyticsRepository {
    async fn get_top_recipients(
        &self,
        limit: i64,
        period: Option<String>,
    ) -> RepositoryResult<Vec<RecipientCount>> {
        self.record("get_top_recipients", limit, period)?;
        Ok(self.recipients.clone())
    }

    async fn get_top_teams(
        &self,
        limit: i64,
        period: Option<String>,
    ) -> RepositoryResult<Vec<TeamCount>> {
        self.record("get_top_teams", limit, period)?;
        Ok(self.teams.clone())
    }

    async fn get_trending_categories(
        &self,
        limit: i64,
        period: Option<String>,
    ) -> RepositoryResult<Vec<CategoryCount>> {
        self.record("get_trending_categories", limit, period)?;
        Ok(self.categories.clone())
    }

    async fn get_trending_keywords(
        &self,
        limit: i64,
        period: Option<String>,
    ) -> RepositoryResult<Vec<KeywordCount>> {
        self.record("get_trending_keywords", limit, period)?;
        Ok(self.keywords.clone())
    }
}

// ===== Kudos cards =====

#[derive(Default)]
pub struct FakeKudosCardRepository {
    pub cards: Vec<Uuid>,
    pub log: CallLog,
}

impl FakeKudosCardRepository {
    pub fn with_card(id: Uuid) -> Self {
        Self {
            cards: vec![id],
            ..Default::default()
        }
    }
}

#[async_trait]
impl KudosCardRepository for FakeKudosCardRepository {
    async fn exists(&self, id: Uuid) -> RepositoryResult<bool> {
        self.log.record("exists");
        Ok(self.cards.contains(&id))
    }

    async fn top_recipients(
        &self,
        _limit: i64,
        _since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<RecipientCount>> {
        self.log.record("top_recipients");
        Ok(Vec::new())
    }

    async fn top_teams(
        &self,
        _limit: i64,
        _since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<TeamCount>> {
        self.log.record("top_teams");
        Ok(Vec::new())
    }

    async fn trending_categories(
        &self,
        _limit: i64,
        _since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<CategoryCount>> {
        self.log.record("trending_categories");
        Ok(Vec::new())
    }

    async fn trending_keywords(
        &self,
        _limit: i64,
        _since: Option<DateTime<Utc>>,
    ) -> RepositoryResult<Vec<KeywordCount>> {
        self.log.record("trending_keywords");
        Ok(Vec::new())
    }
}

// ===== Comments =====

#[derive(Default)]
pub struct FakeCommentRepository {
    pub comments: Mutex<HashMap<Uuid, Comment>>,
    pub log: CallLog,
}

impl FakeCommentRepository {
    pub fn with_comment(comment: Comment) -> Self {
        let repo = Self::default();
        repo.comments
            .lock()
            .unwrap()
            .insert(comment.id(), comment);
        repo
    }

    pub fn get(&self, id: Uuid) -> Option<Comment> {
        self.comments.lock().unwrap().get(&id).cloned()
    }

    fn live_on_card(&self, kudos_card_id: Uuid) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.kudos_card_id() == kudos_card_id && !c.is_deleted())
            .cloned()
            .collect();
        comments.sort_by_key(|c| c.created_at());
        comments
    }
}

#[async_trait]
impl CommentRepository for FakeCommentRepository {
    async fn add(&self, comment: &Comment) -> RepositoryResult<()> {
        self.log.record("add");
        self.comments
            .lock()
            .unwrap()
            .insert(comment.id(), comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> RepositoryResult<()> {
        self.log.record("update");
        self.comments
            .lock()
            .unwrap()
            .insert(comment.id(), comment.clone());
        Ok(())
    }

    async fn soft_delete(&self, comment: &Comment) -> RepositoryResult<()> {
        self.log.record("soft_delete");
        self.comments
            .lock()
            .unwrap()
            .insert(comment.id(), comment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Comment>> {
        self.log.record("find_by_id");
        Ok(self.get(id))
    }

    async fn find_by_kudos_card_id(
        &self,
        kudos_card_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> RepositoryResult<Vec<Comment>> {
        self.log.record("find_by_kudos_card_id");
        Ok(self
            .live_on_card(kudos_card_id)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_by_kudos_card_id(&self, kudos_card_id: Uuid) -> RepositoryResult<i64> {
        self.log.record("count_by_kudos_card_id");
        Ok(self.live_on_card(kudos_card_id).len() as i64)
    }
}

// ===== Reactions =====

#[derive(Default)]
pub struct FakeReactionRepository {
    pub reactions: Mutex<HashMap<Uuid, Reaction>>,
    pub log: CallLog,
}

impl FakeReactionRepository {
    pub fn with_reaction(reaction: Reaction) -> Self {
        let repo = Self::default();
        repo.reactions
            .lock()
            .unwrap()
            .insert(reaction.id(), reaction);
        repo
    }

    pub fn len(&self) -> usize {
        self.reactions.lock().unwrap().len()
    }
}

#[async_trait]
impl ReactionRepository for FakeReactionRepository {
    async fn add(&self, reaction: &Reaction) -> RepositoryResult<()> {
        self.log.record("add");
        self.reactions
            .lock()
            .unwrap()
            .insert(reaction.id(), reaction.clone());
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> RepositoryResult<()> {
        self.log.record("remove");
        self.reactions.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Reaction>> {
        self.log.record("find_by_id");
        Ok(self.reactions.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_kudos_card_id(&self, kudos_card_id: Uuid) -> RepositoryResult<Vec<Reaction>> {
        self.log.record("find_by_kudos_card_id");
        let mut reactions: Vec<Reaction> = self
            .reactions
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.kudos_card_id() == kudos_card_id)
            .cloned()
            .collect();
        reactions.sort_by_key(|r| r.created_at());
        Ok(reactions)
    }

    async fn find_by_user_and_type(
        &self,
        kudos_card_id: Uuid,
        user_id: Uuid,
        reaction_type: ReactionType,
    ) -> RepositoryResult<Option<Reaction>> {
        self.log.record("find_by_user_and_type");
        Ok(self
            .reactions
            .lock()
            .unwrap()
            .values()
            .find(|r| {
                r.kudos_card_id() == kudos_card_id
                    && r.user_id() == user_id
                    && r.reaction_type() == reaction_type
            })
            .cloned())
    }

    async fn count_by_type(&self, kudos_card_id: Uuid) -> RepositoryResult<ReactionCounts> {
        self.log.record("count_by_type");
        Ok(self
            .reactions
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.kudos_card_id() == kudos_card_id)
            .map(|r| r.reaction_type())
            .collect())
    }
}

// ===== Teams =====

#[derive(Default)]
pub struct FakeTeamRepository {
    pub teams: Mutex<HashMap<Uuid, Team>>,
    pub teams_in_use: Vec<Uuid>,
    pub log: CallLog,
}

impl FakeTeamRepository {
    pub fn with_team(team: Team) -> Self {
        let repo = Self::default();
        repo.teams.lock().unwrap().insert(team.id(), team);
        repo
    }

    pub fn get(&self, id: Uuid) -> Option<Team> {
        self.teams.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl TeamRepository for FakeTeamRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        self.log.record("find_all");
        let mut teams: Vec<Team> = self.teams.lock().unwrap().values().cloned().collect();
        teams.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(teams)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        self.log.record("find_by_id");
        Ok(self.get(id))
    }

    async fn create(&self, team: &Team) -> RepositoryResult<()> {
        self.log.record("create");
        self.teams.lock().unwrap().insert(team.id(), team.clone());
        Ok(())
    }

    async fn update(&self, team: &Team) -> RepositoryResult<()> {
        self.log.record("update");
        self.teams.lock().unwrap().insert(team.id(), team.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        self.log.record("delete");
        if self.teams_in_use.contains(&id) {
            return Err(RepositoryError::TeamInUse(id));
        }
        self.teams.lock().unwrap().remove(&id);
        Ok(())
    }
}
