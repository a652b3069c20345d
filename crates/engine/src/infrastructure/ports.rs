//! Port traits for request persistence.

use async_trait::async_trait;
use approvals_domain::{Decision, Request, RequestId};

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Entity not found - includes the id for actionable error messages.
    #[error("Request not found: {0}")]
    NotFound(RequestId),

    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// The stored status does not allow the requested change.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Stored row could not be turned back into a domain value.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

/// Persistence for requests, ordered by submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestRepo: Send + Sync {
    /// All requests, oldest first
    async fn list(&self) -> Result<Vec<Request>, RepoError>;

    async fn get(&self, id: &RequestId) -> Result<Option<Request>, RepoError>;

    async fn insert(&self, request: &Request) -> Result<(), RepoError>;

    /// Record `decision` as a single check-and-set.
    ///
    /// Succeeds when the request is pending or already carries the decision,
    /// returning the stored request and whether its status changed. Any other
    /// stored decision fails with [`RepoError::Conflict`].
    async fn apply_decision(
        &self,
        id: &RequestId,
        decision: Decision,
    ) -> Result<(Request, bool), RepoError>;

    /// Returns whether a request was removed.
    async fn delete(&self, id: &RequestId) -> Result<bool, RepoError>;
}
