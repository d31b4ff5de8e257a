//! Application state for the web layer.

use std::sync::Arc;

use crate::repo::StationRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The configured station repository.
    pub repo: Arc<StationRepository>,
}

impl AppState {
    /// Create a new app state over a shared repository.
    pub fn new(repo: Arc<StationRepository>) -> Self {
        Self { repo }
    }
}
