//! Request DTOs

use serde::{Deserialize, Serialize};

use approvals_domain::{Decision, Request, RequestId, RequestStatus};

/// One entry of the `GET /view_requests` array.
///
/// `status` is optional on the wire: stores that predate status tracking send
/// only `{ id, name, date, reason }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDto {
    pub id: RequestId,
    pub name: String,
    pub date: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
}

impl From<Request> for RequestDto {
    fn from(request: Request) -> Self {
        Self {
            id: request.id,
            name: request.name,
            date: request.date,
            reason: request.reason,
            status: Some(request.status),
        }
    }
}

/// JSON body of `POST /update_request/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusBody {
    pub status: Decision,
}

/// URL-encoded body of `POST /delete_request`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequestForm {
    pub id: RequestId,
}

/// JSON body of `POST /submit_request`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRequestBody {
    pub name: String,
    pub date: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_entries_without_status_parse() {
        let json = r#"[{"id": 0, "name": "Ada", "date": "2024-07-27", "reason": "Vacation"}]"#;
        let entries: Vec<RequestDto> = serde_json::from_str(json).unwrap();

        assert_eq!(entries[0].id, RequestId::from(0));
        assert_eq!(entries[0].status, None);
    }

    #[test]
    fn update_body_matches_wire_shape() {
        let body = UpdateStatusBody {
            status: Decision::Accepted,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "status": "accepted" })
        );
    }

    #[test]
    fn pending_status_is_not_a_valid_update() {
        let parsed = serde_json::from_str::<UpdateStatusBody>(r#"{"status": "pending"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn dto_from_request_carries_status() {
        let request = Request::new("Ada", "2024-07-27", "Vacation").unwrap();
        let dto = RequestDto::from(request.clone());
        assert_eq!(dto.id, request.id);
        assert_eq!(dto.status, Some(RequestStatus::Pending));
    }
}
