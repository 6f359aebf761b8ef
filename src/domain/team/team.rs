use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a team name, in characters
pub const MAX_TEAM_NAME_LENGTH: usize = 100;

/// Team aggregate root
///
/// A named group of employees that kudos cards can be attributed to.
///
/// # Invariants
/// - Name cannot be empty or whitespace only
/// - Name cannot exceed 100 characters
/// - `updated_at` moves forward on every rename
///
/// # Example
/// ```
/// use kudos_api::domain::team::Team;
///
/// let team = Team::create("Platform").expect("valid team");
/// assert_eq!(team.name(), "Platform");
/// ```
#[derive(Debug, Clone)]
pub struct Team {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Plain copy of a team's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team
    ///
    /// # Returns
    /// * `Ok(Team)` - New team with both timestamps set to now
    /// * `Err(String)` - If the name is empty or too long
    pub fn create(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        Self::validate_name(&name)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Renames the team
    ///
    /// The name is validated with the same rules as [`Team::create`]. On
    /// failure the team is left untouched.
    pub fn update_name(&mut self, name: impl Into<String>) -> Result<(), String> {
        let name = name.into();
        Self::validate_name(&name)?;

        self.name = name;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        if name.chars().count() > MAX_TEAM_NAME_LENGTH {
            return Err(format!(
                "Team name cannot exceed {} characters",
                MAX_TEAM_NAME_LENGTH
            ));
        }

        Ok(())
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last modification timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns a detached copy of the team's state
    pub fn snapshot(&self) -> TeamSnapshot {
        TeamSnapshot {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Bypasses validation since the row was validated before it was stored.
    /// Only to be used by repository implementations.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}
