use std::sync::Arc;
use uuid::Uuid;

use super::dto::TeamDto;
use super::team_not_found;
use crate::application::errors::UseCaseResult;
use crate::domain::repositories::TeamRepository;

pub struct GetTeamUseCase {
    teams: Arc<dyn TeamRepository>,
}

impl GetTeamUseCase {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn execute(&self, id: Uuid) -> UseCaseResult<TeamDto> {
        let team = self
            .teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| team_not_found(id))?;

        Ok(TeamDto::from(&team))
    }
}
