// HTTP handlers, one module per resource

pub mod admin;
pub mod analytics;
pub mod comments;
pub mod health;
pub mod reactions;
pub mod teams;
