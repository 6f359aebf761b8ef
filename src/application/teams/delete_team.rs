use std::sync::Arc;
use uuid::Uuid;

use super::dto::DeleteTeamResponse;
use super::team_not_found;
use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::domain::repositories::{RepositoryError, TeamRepository};

/// Deletes a team that no kudos card references
pub struct DeleteTeamUseCase {
    teams: Arc<dyn TeamRepository>,
}

impl DeleteTeamUseCase {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn execute(&self, id: Uuid) -> UseCaseResult<DeleteTeamResponse> {
        if self.teams.find_by_id(id).await?.is_none() {
            return Err(team_not_found(id));
        }

        self.teams.delete(id).await.map_err(|e| match e {
            RepositoryError::TeamInUse(team_id) => UseCaseError::TeamInUse(team_id),
            other => other.into(),
        })?;

        tracing::info!(team_id = %id, "team deleted");
        Ok(DeleteTeamResponse { success: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::FakeTeamRepository;
    use crate::domain::team::Team;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[tokio::test]
    async fn deletes_unreferenced_team() {
        let team = Team::create("Short lived").unwrap();
        let repo = Arc::new(FakeTeamRepository::with_team(team.clone()));

        let response = DeleteTeamUseCase::new(repo.clone())
            .execute(team.id())
            .await
            .unwrap();

        assert!(response.success);
        assert!(repo.get(team.id()).is_none());
    }

    #[tokio::test]
    async fn referenced_team_is_refused() {
        let team = Team::create("Busy").unwrap();
        let repo = Arc::new(FakeTeamRepository {
            teams: Mutex::new(HashMap::from([(team.id(), team.clone())])),
            teams_in_use: vec![team.id()],
            ..Default::default()
        });

        let result = DeleteTeamUseCase::new(repo.clone()).execute(team.id()).await;

        assert!(matches!(result, Err(UseCaseError::TeamInUse(id)) if id == team.id()));
        assert!(repo.get(team.id()).is_some());
    }

    #[tokio::test]
    async fn missing_team_is_not_found() {
        let repo = Arc::new(FakeTeamRepository::default());

        let result = DeleteTeamUseCase::new(repo.clone())
            .execute(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(UseCaseError::NotFound(_))));
        assert_eq!(repo.log.count("delete"), 0);
    }
}
