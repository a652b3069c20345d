//! Client-side cache of decisions made on this client.
//!
//! Lets a decision survive a reload against a store that does not report
//! status. The store stays authoritative whenever it does report one.

use approvals_domain::{CachedStatus, Decision, RequestId};

use crate::application::view_model::RequestItemView;
use crate::ports::outbound::{storage_keys, StorageProvider};

#[derive(Clone)]
pub struct StatusCache<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> StatusCache<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn get(&self, id: &RequestId) -> Option<Decision> {
        let raw = self.storage.load(&storage_keys::request_status(id))?;
        let decision = CachedStatus::parse_value(&raw);
        if decision.is_none() {
            tracing::debug!(request_id = %id, value = %raw, "Ignoring unreadable cached status");
        }
        decision
    }

    pub fn record(&self, id: &RequestId, decision: Decision) {
        let cached = CachedStatus::new(id, decision);
        self.storage
            .save(&storage_keys::request_status(id), cached.storage_value());
    }

    pub fn invalidate(&self, id: &RequestId) {
        self.storage.remove(&storage_keys::request_status(id));
    }

    /// Show the cached decision on a freshly rendered item. Applying twice is
    /// the same as applying once.
    pub fn apply_to(&self, item: &mut RequestItemView) {
        if let Some(decision) = self.get(&item.id) {
            item.show_badge(decision);
        }
    }

    /// Square the cache with what the store just reported for `item`.
    ///
    /// - decided on the store: the store wins and the cache follows it
    /// - pending on the store: a cached decision is stale and is evicted
    /// - no status reported: the cached decision is shown
    pub fn reconcile(&self, item: &mut RequestItemView) {
        match item.server_status.map(|status| status.decision()) {
            Some(Some(decision)) => {
                if self.get(&item.id) != Some(decision) {
                    self.record(&item.id, decision);
                }
            }
            Some(None) => {
                if self.get(&item.id).is_some() {
                    tracing::debug!(request_id = %item.id, "Evicting stale cached status");
                    self.invalidate(&item.id);
                }
            }
            None => self.apply_to(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::MemoryStorageProvider;
    use approvals_domain::RequestStatus;
    use approvals_shared::RequestDto;

    fn item(id: u64, status: Option<RequestStatus>) -> RequestItemView {
        RequestItemView::from_dto(RequestDto {
            id: RequestId::from(id),
            name: "Ada".to_string(),
            date: "2024-05-01".to_string(),
            reason: "Vacation".to_string(),
            status,
        })
    }

    #[test]
    fn records_under_request_key() {
        let storage = MemoryStorageProvider::default();
        let cache = StatusCache::new(storage.clone());

        cache.record(&RequestId::from(1), Decision::Accepted);

        assert_eq!(storage.load("request-1-status").as_deref(), Some("accepted"));
        assert_eq!(cache.get(&RequestId::from(1)), Some(Decision::Accepted));
    }

    #[test]
    fn invalidate_removes_entry() {
        let cache = StatusCache::new(MemoryStorageProvider::default());
        cache.record(&RequestId::from(2), Decision::Denied);

        cache.invalidate(&RequestId::from(2));

        assert_eq!(cache.get(&RequestId::from(2)), None);
    }

    #[test]
    fn unreadable_values_are_treated_as_absent() {
        let storage = MemoryStorageProvider::default();
        storage.save("request-3-status", "maybe");
        let cache = StatusCache::new(storage);

        assert_eq!(cache.get(&RequestId::from(3)), None);
    }

    #[test]
    fn apply_is_idempotent() {
        let cache = StatusCache::new(MemoryStorageProvider::default());
        cache.record(&RequestId::from(0), Decision::Denied);
        let mut once = item(0, None);
        cache.apply_to(&mut once);
        let mut twice = once.clone();
        cache.apply_to(&mut twice);

        assert_eq!(once, twice);
        assert_eq!(twice.badge(), Some(Decision::Denied));
    }

    #[test]
    fn legacy_payload_uses_cached_decision() {
        let cache = StatusCache::new(MemoryStorageProvider::default());
        cache.record(&RequestId::from(0), Decision::Accepted);
        let mut legacy = item(0, None);

        cache.reconcile(&mut legacy);

        assert_eq!(legacy.badge(), Some(Decision::Accepted));
    }

    #[test]
    fn server_decision_overrides_cache() {
        let cache = StatusCache::new(MemoryStorageProvider::default());
        cache.record(&RequestId::from(0), Decision::Accepted);
        let mut denied = item(0, Some(RequestStatus::Denied));

        cache.reconcile(&mut denied);

        assert_eq!(denied.badge(), Some(Decision::Denied));
        assert_eq!(cache.get(&RequestId::from(0)), Some(Decision::Denied));
    }

    #[test]
    fn server_pending_evicts_cache() {
        let cache = StatusCache::new(MemoryStorageProvider::default());
        cache.record(&RequestId::from(0), Decision::Accepted);
        let mut pending = item(0, Some(RequestStatus::Pending));

        cache.reconcile(&mut pending);

        assert_eq!(pending.badge(), None);
        assert!(pending.decision_controls_visible());
        assert_eq!(cache.get(&RequestId::from(0)), None);
    }
}
