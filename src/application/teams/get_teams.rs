use std::sync::Arc;

use super::dto::TeamDto;
use crate::application::errors::UseCaseResult;
use crate::domain::repositories::TeamRepository;

pub struct GetTeamsUseCase {
    teams: Arc<dyn TeamRepository>,
}

impl GetTeamsUseCase {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn execute(&self) -> UseCaseResult<Vec<TeamDto>> {
        let teams = self.teams.find_all().await?;
        Ok(teams.iter().map(TeamDto::from).collect())
    }
}
