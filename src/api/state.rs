//! Shared handler state

use std::sync::Arc;

use crate::dashboard::Dashboard;

/// State shared across all handlers
pub struct AppState {
    pub dashboard: Dashboard,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self { dashboard }
    }

    pub fn shared(dashboard: Dashboard) -> Arc<Self> {
        Arc::new(Self::new(dashboard))
    }
}
