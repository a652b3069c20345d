//! Accept, deny, and delete, plus loading the list they act on.
//!
//! The controller talks to the store through `RequestStorePort`, writes every
//! visible change through a `ViewSink`, and keeps the optional status cache in
//! step with confirmed decisions. It never touches the view while a request is
//! outstanding, so a signal-backed sink is never borrowed across an await.

use std::sync::Arc;

use approvals_domain::{Decision, RequestId};

use crate::application::error::ActionError;
use crate::application::services::StatusCache;
use crate::application::view_model::{PendingAction, ViewSink};
use crate::ports::outbound::{RequestStorePort, StorageProvider};

#[derive(Clone)]
pub struct RequestActionController<S: StorageProvider> {
    store: Arc<dyn RequestStorePort>,
    cache: Option<StatusCache<S>>,
}

impl<S: StorageProvider> RequestActionController<S> {
    /// Controller without a status cache; only the store's status is shown.
    pub fn new(store: Arc<dyn RequestStorePort>) -> Self {
        Self { store, cache: None }
    }

    pub fn with_cache(store: Arc<dyn RequestStorePort>, cache: StatusCache<S>) -> Self {
        Self {
            store,
            cache: Some(cache),
        }
    }

    pub fn cache(&self) -> Option<&StatusCache<S>> {
        self.cache.as_ref()
    }

    /// Load the list once. Later calls are no-ops returning `Ok(false)`.
    pub async fn initialize<V: ViewSink>(&self, view: &mut V) -> Result<bool, ActionError> {
        let should_load = view.update(|v| {
            if v.needs_load() {
                v.mark_loading();
                true
            } else {
                false
            }
        });
        if !should_load {
            return Ok(false);
        }
        self.fetch_into(view).await.map(|_| true)
    }

    /// Fetch the full list again and re-render it. Returns the item count.
    pub async fn reload<V: ViewSink>(&self, view: &mut V) -> Result<usize, ActionError> {
        view.update(|v| v.mark_loading());
        self.fetch_into(view).await
    }

    pub async fn accept<V: ViewSink>(&self, view: &mut V, id: &RequestId) -> Result<(), ActionError> {
        self.decide(view, id, Decision::Accepted).await
    }

    pub async fn deny<V: ViewSink>(&self, view: &mut V, id: &RequestId) -> Result<(), ActionError> {
        self.decide(view, id, Decision::Denied).await
    }

    pub async fn decide<V: ViewSink>(
        &self,
        view: &mut V,
        id: &RequestId,
        decision: Decision,
    ) -> Result<(), ActionError> {
        view.update(|v| v.begin_action(id, PendingAction::Decide(decision)))?;

        match self.store.update_status(id, decision).await {
            Ok(()) => {
                if let Some(cache) = &self.cache {
                    cache.record(id, decision);
                }
                view.update(|v| v.complete_decision(id, decision));
                tracing::info!(request_id = %id, status = %decision, "Request decided");
                Ok(())
            }
            Err(e) => {
                tracing::error!(request_id = %id, status = %decision, error = %e, "Error updating request");
                // Gone or decided elsewhere: a retry cannot succeed, show the store's state.
                let diverged = matches!(e.status(), Some(404 | 409));
                let err = ActionError::from(e);
                view.update(|v| v.fail_action(id, err.retry_hint()));
                if diverged {
                    tracing::info!(request_id = %id, "Request changed in the store, reloading");
                    let _ = self.reload(view).await;
                }
                Err(err)
            }
        }
    }

    /// Delete one request, drop its row, then re-fetch the list so the view
    /// matches the store. A failed re-fetch leaves the list marked
    /// `LoadFailed` but the delete still counts as done.
    pub async fn delete<V: ViewSink>(&self, view: &mut V, id: &RequestId) -> Result<(), ActionError> {
        view.update(|v| v.begin_action(id, PendingAction::Delete))?;

        if let Err(e) = self.store.delete_request(id).await {
            tracing::error!(request_id = %id, error = %e, "Error deleting request");
            let err = ActionError::from(e);
            view.update(|v| v.fail_action(id, err.retry_hint()));
            return Err(err);
        }

        if let Some(cache) = &self.cache {
            cache.invalidate(id);
        }
        tracing::info!(request_id = %id, "Request deleted");

        view.update(|v| v.remove(id));
        let _ = self.reload(view).await;
        Ok(())
    }

    async fn fetch_into<V: ViewSink>(&self, view: &mut V) -> Result<usize, ActionError> {
        match self.store.list_requests().await {
            Ok(requests) => {
                let count = view.update(|v| {
                    v.render(requests);
                    if let Some(cache) = &self.cache {
                        for item in v.items_mut() {
                            cache.reconcile(item);
                        }
                    }
                    v.len()
                });
                tracing::debug!(count, "Rendered request list");
                Ok(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching requests");
                view.update(|v| v.load_failed(e.to_string()));
                Err(e.into())
            }
        }
    }
}
