use std::sync::Arc;

use vinyl_core::Repository;

/// Shared handler state: the album repository, set once at startup.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn Repository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &dyn Repository {
        self.repository.as_ref()
    }
}
