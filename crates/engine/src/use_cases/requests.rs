//! Request lifecycle: list, submit, decide, delete.

use std::sync::Arc;

use approvals_domain::{Decision, DomainError, Request, RequestId};

use crate::infrastructure::ports::{RepoError, RequestRepo};

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Request not found: {0}")]
    NotFound(RequestId),
    /// The request already carries a different decision.
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Repo(RepoError),
}

impl From<RepoError> for RequestError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(id) => Self::NotFound(id),
            RepoError::Conflict(msg) => Self::Conflict(msg),
            other => Self::Repo(other),
        }
    }
}

impl From<DomainError> for RequestError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidStateTransition(msg) => Self::Conflict(msg),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

pub struct RequestManagement {
    repo: Arc<dyn RequestRepo>,
}

impl RequestManagement {
    pub fn new(repo: Arc<dyn RequestRepo>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Request>, RequestError> {
        Ok(self.repo.list().await?)
    }

    pub async fn submit(
        &self,
        name: String,
        date: String,
        reason: String,
    ) -> Result<Request, RequestError> {
        let request = Request::new(name, date, reason)?;
        self.repo.insert(&request).await?;
        tracing::info!(request_id = %request.id, "Request submitted");
        Ok(request)
    }

    /// Record an operator decision. Repeating the stored decision succeeds.
    pub async fn decide(&self, id: &RequestId, decision: Decision) -> Result<Request, RequestError> {
        let (request, changed) = self.repo.apply_decision(id, decision).await?;

        if changed {
            tracing::info!(request_id = %id, status = %request.status, "Request decided");
        } else {
            tracing::debug!(request_id = %id, status = %request.status, "Decision already recorded");
        }

        Ok(request)
    }

    /// Remove a request. Deleting an unknown id succeeds so retries are safe.
    pub async fn delete(&self, id: &RequestId) -> Result<(), RequestError> {
        if self.repo.delete(id).await? {
            tracing::info!(request_id = %id, "Request deleted");
        } else {
            tracing::debug!(request_id = %id, "Delete of unknown request ignored");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryRequestRepo;
    use crate::infrastructure::ports::MockRequestRepo;
    use approvals_domain::RequestStatus;
    use mockall::predicate::*;

    fn pending(id: u64) -> Request {
        Request::with_id(RequestId::from(id), "Ada", "2024-07-27", "Vacation").unwrap()
    }

    #[tokio::test]
    async fn decide_pending_request_persists_status() {
        let mut repo = MockRequestRepo::new();
        repo.expect_apply_decision()
            .with(eq(RequestId::from(1)), eq(Decision::Accepted))
            .times(1)
            .returning(|_, decision| {
                let mut request = pending(1);
                request.status = decision.status();
                Ok((request, true))
            });

        let ops = RequestManagement::new(Arc::new(repo));
        let decided = ops
            .decide(&RequestId::from(1), Decision::Accepted)
            .await
            .unwrap();

        assert_eq!(decided.status, RequestStatus::Accepted);
    }

    #[tokio::test]
    async fn repeated_decision_succeeds() {
        let mut repo = MockRequestRepo::new();
        repo.expect_apply_decision().returning(|_, _| {
            let mut request = pending(1);
            request.status = RequestStatus::Denied;
            Ok((request, false))
        });

        let ops = RequestManagement::new(Arc::new(repo));
        let decided = ops
            .decide(&RequestId::from(1), Decision::Denied)
            .await
            .unwrap();

        assert_eq!(decided.status, RequestStatus::Denied);
    }

    #[tokio::test]
    async fn conflicting_decision_is_rejected() {
        let mut repo = MockRequestRepo::new();
        repo.expect_apply_decision()
            .returning(|id, _| Err(RepoError::Conflict(format!("request {id} is already accepted"))));

        let ops = RequestManagement::new(Arc::new(repo));
        let err = ops
            .decide(&RequestId::from(1), Decision::Denied)
            .await
            .unwrap_err();

        assert!(matches!(err, RequestError::Conflict(_)));
    }

    #[tokio::test]
    async fn deciding_unknown_request_is_not_found() {
        let mut repo = MockRequestRepo::new();
        repo.expect_apply_decision()
            .returning(|id, _| Err(RepoError::NotFound(id.clone())));

        let ops = RequestManagement::new(Arc::new(repo));
        let err = ops
            .decide(&RequestId::from(5), Decision::Accepted)
            .await
            .unwrap_err();

        assert!(matches!(err, RequestError::NotFound(_)));
    }

    #[tokio::test]
    async fn simultaneous_opposite_decisions_let_only_one_through() {
        let repo = InMemoryRequestRepo::with_requests(vec![pending(1)]);
        let ops = RequestManagement::new(Arc::new(repo));
        let id = RequestId::from(1);

        let (accept, deny) = tokio::join!(
            ops.decide(&id, Decision::Accepted),
            ops.decide(&id, Decision::Denied)
        );

        let stored = ops.list().await.unwrap()[0].status;
        match (accept, deny) {
            (Ok(decided), Err(RequestError::Conflict(_)))
            | (Err(RequestError::Conflict(_)), Ok(decided)) => {
                assert_eq!(decided.status, stored);
            }
            other => panic!("expected exactly one decision to win, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn submit_rejects_blank_fields() {
        let mut repo = MockRequestRepo::new();
        repo.expect_insert().never();

        let ops = RequestManagement::new(Arc::new(repo));
        let err = ops
            .submit("".into(), "2024-07-27".into(), "Vacation".into())
            .await
            .unwrap_err();

        assert!(matches!(err, RequestError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn delete_of_missing_request_succeeds() {
        let mut repo = MockRequestRepo::new();
        repo.expect_delete().returning(|_| Ok(false));

        let ops = RequestManagement::new(Arc::new(repo));
        assert!(ops.delete(&RequestId::from(3)).await.is_ok());
    }
}
