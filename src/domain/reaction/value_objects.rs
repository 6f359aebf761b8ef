use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of reaction a user can leave on a kudos card
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "reaction_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    Like,
    Love,
    Celebrate,
    Insightful,
    Curious,
}

impl ReactionType {
    /// Every reaction type, in display order
    pub const ALL: [ReactionType; 5] = [
        ReactionType::Like,
        ReactionType::Love,
        ReactionType::Celebrate,
        ReactionType::Insightful,
        ReactionType::Curious,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionType::Like => "like",
            ReactionType::Love => "love",
            ReactionType::Celebrate => "celebrate",
            ReactionType::Insightful => "insightful",
            ReactionType::Curious => "curious",
        }
    }
}

impl FromStr for ReactionType {
    type Err = String;

    /// Parses the lower-case wire form
    ///
    /// # Example
    /// ```
    /// use kudos_api::domain::reaction::ReactionType;
    ///
    /// assert_eq!("love".parse::<ReactionType>(), Ok(ReactionType::Love));
    /// assert!("meh".parse::<ReactionType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid reaction type: {}. Valid types are: like, love, celebrate, insightful, curious",
                    s
                )
            })
    }
}

impl std::fmt::Display for ReactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Number of reactions of each type on a single kudos card
///
/// Every type is always present, at zero when nobody used it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub like: i64,
    pub love: i64,
    pub celebrate: i64,
    pub insightful: i64,
    pub curious: i64,
}

impl ReactionCounts {
    fn slot(&mut self, reaction_type: ReactionType) -> &mut i64 {
        match reaction_type {
            ReactionType::Like => &mut self.like,
            ReactionType::Love => &mut self.love,
            ReactionType::Celebrate => &mut self.celebrate,
            ReactionType::Insightful => &mut self.insightful,
            ReactionType::Curious => &mut self.curious,
        }
    }

    pub fn get(&self, reaction_type: ReactionType) -> i64 {
        match reaction_type {
            ReactionType::Like => self.like,
            ReactionType::Love => self.love,
            ReactionType::Celebrate => self.celebrate,
            ReactionType::Insightful => self.insightful,
            ReactionType::Curious => self.curious,
        }
    }

    pub fn set(&mut self, reaction_type: ReactionType, count: i64) {
        *self.slot(reaction_type) = count;
    }

    pub fn increment(&mut self, reaction_type: ReactionType) {
        *self.slot(reaction_type) += 1;
    }

    pub fn total(&self) -> i64 {
        ReactionType::ALL.iter().map(|t| self.get(*t)).sum()
    }
}

impl FromIterator<ReactionType> for ReactionCounts {
    fn from_iter<I: IntoIterator<Item = ReactionType>>(iter: I) -> Self {
        let mut counts = Self::default();
        for reaction_type in iter {
            counts.increment(reaction_type);
        }
        counts
    }
}
