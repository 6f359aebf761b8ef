use std::sync::Arc;
use uuid::Uuid;

use super::dto::{TeamDto, UpdateTeamRequest};
use super::team_not_found;
use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::domain::repositories::TeamRepository;

/// Applies a partial update to a team
///
/// A missing team is reported as `NotFound`; invalid new values are reported
/// as `Validation`.
pub struct UpdateTeamUseCase {
    teams: Arc<dyn TeamRepository>,
}

impl UpdateTeamUseCase {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn execute(&self, id: Uuid, request: UpdateTeamRequest) -> UseCaseResult<TeamDto> {
        let mut team = self
            .teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| team_not_found(id))?;

        if let Some(name) = request.name {
            team.update_name(name).map_err(UseCaseError::Validation)?;
        }

        self.teams.update(&team).await?;

        tracing::info!(team_id = %id, "team updated");
        Ok(TeamDto::from(&team))
    }
}
