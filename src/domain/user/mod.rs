// User domain module
// Read model for users owned by the auth module

#![allow(clippy::module_inception)]

pub mod user;
pub mod value_objects;

pub use user::{User, UserSearchFilters};
pub use value_objects::{ApprovalStatus, Email, Role};
