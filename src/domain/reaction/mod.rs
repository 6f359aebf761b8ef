// Reaction domain module
// Contains the reaction entity and its value objects

#![allow(clippy::module_inception)]

pub mod reaction;
pub mod value_objects;

pub use reaction::{Reaction, ReactionSnapshot};
pub use value_objects::{ReactionCounts, ReactionType};
