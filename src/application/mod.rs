// Application layer: one use case per user-facing action
//
// Use cases receive their repositories through `new` and hold no other
// state, so a single instance can serve any number of requests.

pub mod admin;
pub mod analytics;
pub mod authorization;
pub mod comments;
pub mod errors;
pub mod pagination;
pub mod reactions;
pub mod teams;

#[cfg(test)]
pub(crate) mod test_support;

pub use authorization::{ensure_role, Actor};
pub use errors::{UseCaseError, UseCaseResult};
