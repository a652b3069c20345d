//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::RequestRepo;
use crate::use_cases::RequestManagement;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub requests: RequestManagement,
}

impl App {
    pub fn new(repo: Arc<dyn RequestRepo>) -> Self {
        Self {
            requests: RequestManagement::new(repo),
        }
    }
}
