//! Raw API Port - Object-safe HTTP boundary
//!
//! Adapters move JSON values and form fields; the typed request store client
//! in `crate::application::api` sits on top and owns the route table.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// GET `path` and parse the body as JSON.
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// POST a JSON body; any 2xx counts as success and the body is ignored.
    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError>;

    /// POST `application/x-www-form-urlencoded` fields; any 2xx counts as success.
    async fn post_form(&self, path: &str, fields: &[(String, String)]) -> Result<(), ApiError>;
}
