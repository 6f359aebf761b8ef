use std::sync::Arc;

use crate::container::Repositories;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub repos: Repositories,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(repos: Repositories, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            repos,
            jwt_secret: jwt_secret.into(),
        }
    }
}
