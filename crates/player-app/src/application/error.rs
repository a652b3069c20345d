//! Errors returned by user-triggered actions on the request list.

use approvals_domain::{Decision, RequestId};

use crate::ports::outbound::ApiError;

/// Why an accept/deny/delete did not go through.
///
/// The first three are rejected locally without touching the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("Request {0} is not in the list")]
    NotListed(RequestId),

    /// Another action on the same request has not settled yet
    #[error("Request {0} already has an action in flight")]
    Busy(RequestId),

    #[error("Request {id} is already {decision}")]
    AlreadyDecided { id: RequestId, decision: Decision },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ActionError {
    /// Short text shown next to the request when the action failed.
    pub fn retry_hint(&self) -> &'static str {
        match self {
            ActionError::Api(ApiError::Timeout(_)) => "Timed out, retry",
            ActionError::Api(_) => "Failed, retry",
            ActionError::Busy(_) => "Still working",
            ActionError::NotListed(_) | ActionError::AlreadyDecided { .. } => "Not available",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_get_their_own_hint() {
        let err = ActionError::from(ApiError::Timeout(10_000));
        assert_eq!(err.retry_hint(), "Timed out, retry");
    }

    #[test]
    fn server_errors_ask_for_retry() {
        let err = ActionError::from(ApiError::HttpError {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(err.retry_hint(), "Failed, retry");
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }
}
