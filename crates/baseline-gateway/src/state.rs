use std::sync::Arc;

use baseline_core::ProfileManager;

#[derive(Clone)]
pub struct AppState {
    profiles: Arc<dyn ProfileManager>,
}

impl AppState {
    pub fn new(profiles: Arc<dyn ProfileManager>) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &dyn ProfileManager {
        self.profiles.as_ref()
    }
}
