//! Typed view of the request store, as the action controller needs it.

use approvals_domain::{Decision, RequestId};
use approvals_shared::RequestDto;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RequestStorePort: Send + Sync {
    /// Fetch every request the store holds, in store order.
    async fn list_requests(&self) -> Result<Vec<RequestDto>, ApiError>;

    /// Record a decision for one request.
    async fn update_status(&self, id: &RequestId, decision: Decision) -> Result<(), ApiError>;

    /// Remove one request. Removing an unknown id is not an error for the store.
    async fn delete_request(&self, id: &RequestId) -> Result<(), ApiError>;
}
