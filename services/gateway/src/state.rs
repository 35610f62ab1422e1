use matching_engine::MatchingEngine;
use std::sync::Arc;

/// Shared application state: the engine outlives every connection
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MatchingEngine>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: Arc::new(MatchingEngine::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
