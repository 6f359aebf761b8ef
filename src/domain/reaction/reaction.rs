use super::value_objects::ReactionType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single user's reaction to a kudos card
///
/// A user may leave several reactions on the same card, but at most one of
/// each [`ReactionType`]. Uniqueness spans many rows, so it is checked by the
/// add-reaction use case and backed by a unique index in the store.
#[derive(Debug, Clone)]
pub struct Reaction {
    id: Uuid,
    kudos_card_id: Uuid,
    user_id: Uuid,
    reaction_type: ReactionType,
    created_at: DateTime<Utc>,
}

/// Plain copy of a reaction's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionSnapshot {
    pub id: Uuid,
    pub kudos_card_id: Uuid,
    pub user_id: Uuid,
    pub reaction_type: ReactionType,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Creates a new reaction
    ///
    /// # Returns
    /// * `Ok(Reaction)` - New reaction stamped with the current time
    /// * `Err(String)` - If either ID is nil
    pub fn create(
        kudos_card_id: Uuid,
        user_id: Uuid,
        reaction_type: ReactionType,
    ) -> Result<Self, String> {
        if kudos_card_id.is_nil() {
            return Err("Kudos card ID is required".to_string());
        }

        if user_id.is_nil() {
            return Err("User ID is required".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            kudos_card_id,
            user_id,
            reaction_type,
            created_at: Utc::now(),
        })
    }

    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
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

    pub fn reaction_type(&self) -> ReactionType {
        self.reaction_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn snapshot(&self) -> ReactionSnapshot {
        ReactionSnapshot {
            id: self.id,
            kudos_card_id: self.kudos_card_id,
            user_id: self.user_id,
            reaction_type: self.reaction_type,
            created_at: self.created_at,
        }
    }

    /// Reconstructs a Reaction from persistence layer data
    pub fn from_persistence(snapshot: ReactionSnapshot) -> Self {
        Self {
            id: snapshot.id,
            kudos_card_id: snapshot.kudos_card_id,
            user_id: snapshot.user_id,
            reaction_type: snapshot.reaction_type,
            created_at: snapshot.created_at,
        }
    }
}
