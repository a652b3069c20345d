//! Typed request store client.
//!
//! `RequestStoreClient` wraps an `Arc<dyn RawApiPort>` and implements
//! `RequestStorePort` via serde_json conversions, so the UI and the action
//! controller never see an adapter type.

use std::sync::Arc;

use approvals_domain::{Decision, RequestId};
use approvals_shared::{routes, RequestDto, UpdateStatusBody};

use crate::ports::outbound::{ApiError, RawApiPort, RequestStorePort};

#[derive(Clone)]
pub struct RequestStoreClient {
    raw: Arc<dyn RawApiPort>,
}

impl RequestStoreClient {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RequestStorePort for RequestStoreClient {
    async fn list_requests(&self) -> Result<Vec<RequestDto>, ApiError> {
        let value = self.raw.get_json(routes::VIEW_REQUESTS).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn update_status(&self, id: &RequestId, decision: Decision) -> Result<(), ApiError> {
        let body = serde_json::to_value(UpdateStatusBody { status: decision })
            .map_err(|e| ApiError::SerializeError(e.to_string()))?;
        self.raw
            .post_no_response_json(&routes::update_request(id), &body)
            .await
    }

    async fn delete_request(&self, id: &RequestId) -> Result<(), ApiError> {
        self.raw
            .post_form(routes::DELETE_REQUEST, &[("id".to_string(), id.to_string())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use approvals_domain::RequestStatus;
    use mockall::predicate::eq;
    use serde_json::json;

    #[tokio::test]
    async fn list_parses_mixed_id_shapes_and_optional_status() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .with(eq("/view_requests"))
            .times(1)
            .returning(|_| {
                Ok(json!([
                    {"id": 0, "name": "Ada", "date": "2024-05-01", "reason": "Vacation"},
                    {"id": "b7", "name": "Lin", "date": "2024-05-02", "reason": "Conference", "status": "denied"}
                ]))
            });

        let client = RequestStoreClient::new(Arc::new(raw));
        let requests = client.list_requests().await.unwrap();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].id, RequestId::from(0));
        assert_eq!(requests[0].status, None);
        assert_eq!(requests[1].id.as_str(), "b7");
        assert_eq!(requests[1].status, Some(RequestStatus::Denied));
    }

    #[tokio::test]
    async fn malformed_list_is_a_parse_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|_| Ok(json!({"requests": "nope"})));

        let client = RequestStoreClient::new(Arc::new(raw));
        let err = client.list_requests().await.unwrap_err();

        assert!(matches!(err, ApiError::ParseError(_)));
    }

    #[tokio::test]
    async fn update_posts_json_status_to_the_request_route() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_no_response_json()
            .withf(|path, body| path == "/update_request/1" && *body == json!({"status": "accepted"}))
            .times(1)
            .returning(|_, _| Ok(()));

        let client = RequestStoreClient::new(Arc::new(raw));
        client
            .update_status(&RequestId::from(1), Decision::Accepted)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_posts_form_encoded_id() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_form()
            .withf(|path, fields| {
                path == "/delete_request" && fields == [("id".to_string(), "2".to_string())]
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let client = RequestStoreClient::new(Arc::new(raw));
        client.delete_request(&RequestId::from(2)).await.unwrap();
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_no_response_json().returning(|_, _| {
            Err(ApiError::HttpError {
                status: 500,
                message: "Internal error".into(),
            })
        });

        let client = RequestStoreClient::new(Arc::new(raw));
        let err = client
            .update_status(&RequestId::from(5), Decision::Denied)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
    }
}
