//! Client-side record of the last decision this client saw for a request

use crate::{Decision, RequestId};

/// A decision remembered locally, keyed by request id.
///
/// Never authoritative: the store's status always wins when it reports one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachedStatus<'a> {
    pub request_id: &'a RequestId,
    pub status: Decision,
}

impl<'a> CachedStatus<'a> {
    pub fn new(request_id: &'a RequestId, status: Decision) -> Self {
        Self { request_id, status }
    }

    /// Storage key for a request's cached status: `request-{id}-status`
    pub fn storage_key(request_id: &RequestId) -> String {
        format!("request-{}-status", request_id)
    }

    /// Stored value (`"accepted"` / `"denied"`)
    pub fn storage_value(&self) -> &'static str {
        self.status.as_str()
    }

    /// Parse a stored value; anything other than a decision is ignored
    pub fn parse_value(value: &str) -> Option<Decision> {
        value.parse().ok()
    }
}
