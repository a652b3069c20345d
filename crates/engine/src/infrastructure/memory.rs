//! In-memory request store, used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use approvals_domain::{Decision, Request, RequestId};

use super::ports::{RepoError, RequestRepo};

/// Insertion-ordered in-memory repository.
#[derive(Default)]
pub struct InMemoryRequestRepo {
    requests: RwLock<Vec<Request>>,
}

impl InMemoryRequestRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, keeping the given order.
    pub fn with_requests(requests: Vec<Request>) -> Self {
        Self {
            requests: RwLock::new(requests),
        }
    }
}

#[async_trait]
impl RequestRepo for InMemoryRequestRepo {
    async fn list(&self) -> Result<Vec<Request>, RepoError> {
        Ok(self.requests.read().await.clone())
    }

    async fn get(&self, id: &RequestId) -> Result<Option<Request>, RepoError> {
        Ok(self
            .requests
            .read()
            .await
            .iter()
            .find(|r| &r.id == id)
            .cloned())
    }

    async fn insert(&self, request: &Request) -> Result<(), RepoError> {
        let mut requests = self.requests.write().await;
        if requests.iter().any(|r| r.id == request.id) {
            return Err(RepoError::database(
                "insert",
                format!("duplicate request id {}", request.id),
            ));
        }
        requests.push(request.clone());
        Ok(())
    }

    async fn apply_decision(
        &self,
        id: &RequestId,
        decision: Decision,
    ) -> Result<(Request, bool), RepoError> {
        let mut requests = self.requests.write().await;
        let request = requests
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;
        let changed = request
            .decide(decision)
            .map_err(|e| RepoError::Conflict(e.to_string()))?;
        Ok((request.clone(), changed))
    }

    async fn delete(&self, id: &RequestId) -> Result<bool, RepoError> {
        let mut requests = self.requests.write().await;
        let before = requests.len();
        requests.retain(|r| &r.id != id);
        Ok(requests.len() != before)
    }
}
