//! Service providers for the presentation layer
//!
//! The composition root builds a `Services` bundle and hands it to Dioxus as
//! context. Components reach the controller through `use_request_actions`
//! and never see an adapter type.

use dioxus::prelude::*;
use std::sync::Arc;

use approvals_player_app::infrastructure::PlatformStorage;
use approvals_player_app::ports::outbound::RequestStorePort;
use approvals_player_app::{RequestActionController, StatusCache};

/// Controller type used by the UI, backed by the platform's storage.
pub type UiController = RequestActionController<PlatformStorage>;

#[derive(Clone)]
pub struct Services {
    pub requests: UiController,
}

impl Services {
    /// Services without a status cache; only the store's status is shown.
    pub fn new(store: Arc<dyn RequestStorePort>) -> Self {
        Self {
            requests: RequestActionController::new(store),
        }
    }

    pub fn with_status_cache(
        store: Arc<dyn RequestStorePort>,
        cache: StatusCache<PlatformStorage>,
    ) -> Self {
        Self {
            requests: RequestActionController::with_cache(store, cache),
        }
    }
}

/// Hook to access the request action controller from context
pub fn use_request_actions() -> UiController {
    let services = use_context::<Services>();
    services.requests.clone()
}
