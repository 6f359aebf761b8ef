use std::sync::Arc;

use super::dto::{CreateTeamRequest, TeamDto};
use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

pub struct CreateTeamUseCase {
    teams: Arc<dyn TeamRepository>,
}

impl CreateTeamUseCase {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn execute(&self, request: CreateTeamRequest) -> UseCaseResult<TeamDto> {
        let team = Team::create(request.name).map_err(UseCaseError::Validation)?;

        self.teams.create(&team).await?;

        tracing::info!(team_id = %team.id(), name = team.name(), "team created");
        Ok(TeamDto::from(&team))
    }
}
