// Reaction use cases
// Reactions are hard-deleted, unlike comments.

pub mod add_reaction;
pub mod dto;
pub mod get_reactions;
pub mod remove_reaction;

pub use add_reaction::AddReactionUseCase;
pub use get_reactions::GetReactionsUseCase;
pub use remove_reaction::RemoveReactionUseCase;
