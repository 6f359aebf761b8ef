use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a comment, in characters
pub const MAX_COMMENT_LENGTH: usize = 500;

/// Comment left on a kudos card
///
/// # Invariants
/// - Kudos card ID and user ID are required (non-nil)
/// - Content cannot be blank and cannot exceed 500 characters
/// - A deleted comment keeps its row; `deleted_at` marks the tombstone
#[derive(Debug, Clone)]
pub struct Comment {
    id: Uuid,
    kudos_card_id: Uuid,
    user_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Plain copy of a comment's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSnapshot {
    pub id: Uuid,
    pub kudos_card_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Creates a new comment attached to a kudos card
    ///
    /// # Returns
    /// * `Ok(Comment)` - New comment with both timestamps set to now
    /// * `Err(String)` - If an ID is missing or the content is invalid
    pub fn create(
        kudos_card_id: Uuid,
        user_id: Uuid,
        content: impl Into<String>,
    ) -> Result<Self, String> {
        if kudos_card_id.is_nil() {
            return Err("Kudos card ID is required".to_string());
        }

        if user_id.is_nil() {
            return Err("User ID is required".to_string());
        }

        let content = content.into();
        Self::validate_content(&content)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            kudos_card_id,
            user_id,
            content,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    /// Replaces the comment's content
    pub fn update(&mut self, content: impl Into<String>) -> Result<(), String> {
        if self.is_deleted() {
            return Err("Cannot update a deleted comment".to_string());
        }

        let content = content.into();
        Self::validate_content(&content)?;

        self.content = content;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Tombstones the comment
    ///
    /// Deleting twice keeps the first deletion time.
    pub fn mark_as_deleted(&mut self) {
        let now = Utc::now();
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.updated_at = now;
    }

    fn validate_content(content: &str) -> Result<(), String> {
        if content.trim().is_empty() {
            return Err("Comment content cannot be empty".to_string());
        }

        if content.chars().count() > MAX_COMMENT_LENGTH {
            return Err(format!(
                "Comment content cannot exceed {} characters",
                MAX_COMMENT_LENGTH
            ));
        }

        Ok(())
    }

    /// Returns true if `user_id` wrote this comment
    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kudos_card_id(&self) -> Uuid {
        self.kudos_card_id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    pub fn snapshot(&self) -> CommentSnapshot {
        CommentSnapshot {
            id: self.id,
            kudos_card_id: self.kudos_card_id,
            user_id: self.user_id,
            content: self.content.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }

    /// Reconstructs a Comment from persistence layer data
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(snapshot: CommentSnapshot) -> Self {
        Self {
            id: snapshot.id,
            kudos_card_id: snapshot.kudos_card_id,
            user_id: snapshot.user_id,
            content: snapshot.content,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
            deleted_at: snapshot.deleted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(content: &str) -> Result<Comment, String> {
        Comment::create(Uuid::new_v4(), Uuid::new_v4(), content)
    }

    #[test]
    fn create_comment_with_valid_content() {
        let card = Uuid::new_v4();
        let user = Uuid::new_v4();

        let comment = Comment::create(card, user, "Great work!").unwrap();

        assert_eq!(comment.kudos_card_id(), card);
        assert_eq!(comment.user_id(), user);
        assert_eq!(comment.content(), "Great work!");
        assert!(!comment.is_deleted());
        assert!(comment.is_authored_by(user));
    }

    #[test]
    fn create_comment_with_blank_content_fails() {
        assert_eq!(
            comment("  ").unwrap_err(),
            "Comment content cannot be empty"
        );
    }

    #[test]
    fn create_comment_with_too_long_content_fails() {
        assert_eq!(
            comment(&"x".repeat(501)).unwrap_err(),
            "Comment content cannot exceed 500 characters"
        );
    }

    #[test]
    fn create_comment_requires_ids() {
        assert_eq!(
            Comment::create(Uuid::nil(), Uuid::new_v4(), "hi").unwrap_err(),
            "Kudos card ID is required"
        );
        assert_eq!(
            Comment::create(Uuid::new_v4(), Uuid::nil(), "hi").unwrap_err(),
            "User ID is required"
        );
    }

    #[test]
    fn update_revalidates_content() {
        let mut comment = comment("first").unwrap();

        assert!(comment.update("").is_err());
        assert_eq!(comment.content(), "first");

        comment.update("second").unwrap();
        assert_eq!(comment.content(), "second");
        assert!(comment.updated_at() >= comment.created_at());
    }

    #[test]
    fn mark_as_deleted_keeps_content() {
        let mut comment = comment("bye").unwrap();

        comment.mark_as_deleted();

        assert!(comment.is_deleted());
        assert_eq!(comment.content(), "bye");
        assert!(comment.update("again").is_err());
    }

    #[test]
    fn second_delete_keeps_first_timestamp() {
        let mut comment = comment("bye").unwrap();
        comment.mark_as_deleted();
        let first = comment.deleted_at();

        comment.mark_as_deleted();

        assert_eq!(comment.deleted_at(), first);
    }
}
