//! Platform abstraction for client-side persistence.
//!
//! Browser builds keep values in `localStorage`; desktop builds keep them in a
//! JSON file under the user's config directory.

/// String key/value storage that survives a page reload or app restart.
///
/// Implementations swallow and log their own I/O failures: a lost write only
/// degrades the status cache, it never blocks a user action.
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage keys used by the client
pub mod storage_keys {
    use approvals_domain::{CachedStatus, RequestId};

    /// Key under which the last known decision for `id` is cached.
    pub fn request_status(id: &RequestId) -> String {
        CachedStatus::storage_key(id)
    }
}
