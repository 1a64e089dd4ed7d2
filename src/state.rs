// src/state.rs
use std::sync::Arc;

use crate::services::provider::ResponseProvider;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub provider: Arc<dyn ResponseProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn ResponseProvider>) -> Self {
        Self { provider }
    }
}
