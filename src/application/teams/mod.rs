// Team CRUD use cases

pub mod create_team;
pub mod delete_team;
pub mod dto;
pub mod get_team;
pub mod get_teams;
pub mod update_team;

pub use create_team::CreateTeamUseCase;
pub use delete_team::DeleteTeamUseCase;
pub use get_team::GetTeamUseCase;
pub use get_teams::GetTeamsUseCase;
pub use update_team::UpdateTeamUseCase;

use uuid::Uuid;

use crate::application::errors::UseCaseError;

fn team_not_found(id: Uuid) -> UseCaseError {
    UseCaseError::NotFound(format!("Team not found: {}", id))
}
