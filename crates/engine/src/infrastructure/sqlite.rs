//! SQLite-backed request storage.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use approvals_domain::{Decision, Request, RequestId, RequestStatus};

use super::ports::{RepoError, RequestRepo};

/// SQLite implementation of the request store.
pub struct SqliteRequestRepo {
    pool: SqlitePool,
}

impl SqliteRequestRepo {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS requests (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                date TEXT NOT NULL,
                reason TEXT NOT NULL,
                status TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("migrate", e))?;

        Ok(Self { pool })
    }

    fn row_to_request(row: &SqliteRow) -> Result<Request, RepoError> {
        let id: String = row.get("id");
        let status: String = row.get("status");

        Ok(Request {
            id: RequestId::new(id).map_err(RepoError::serialization)?,
            name: row.get("name"),
            date: row.get("date"),
            reason: row.get("reason"),
            status: status
                .parse::<RequestStatus>()
                .map_err(RepoError::serialization)?,
        })
    }
}

#[async_trait]
impl RequestRepo for SqliteRequestRepo {
    async fn list(&self) -> Result<Vec<Request>, RepoError> {
        let rows = sqlx::query("SELECT id, name, date, reason, status FROM requests ORDER BY seq")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list", e))?;

        rows.iter().map(Self::row_to_request).collect()
    }

    async fn get(&self, id: &RequestId) -> Result<Option<Request>, RepoError> {
        let row = sqlx::query("SELECT id, name, date, reason, status FROM requests WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get", e))?;

        row.as_ref().map(Self::row_to_request).transpose()
    }

    async fn insert(&self, request: &Request) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO requests (id, name, date, reason, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(request.id.as_str())
        .bind(&request.name)
        .bind(&request.date)
        .bind(&request.reason)
        .bind(request.status.as_str())
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("insert", e))?;

        Ok(())
    }

    async fn apply_decision(
        &self,
        id: &RequestId,
        decision: Decision,
    ) -> Result<(Request, bool), RepoError> {
        // Only a pending row may change; the WHERE clause is the transition check.
        let result = sqlx::query("UPDATE requests SET status = ? WHERE id = ? AND status = ?")
            .bind(decision.as_str())
            .bind(id.as_str())
            .bind(RequestStatus::Pending.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("apply_decision", e))?;
        let changed = result.rows_affected() > 0;

        let request = self
            .get(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;

        if request.status != decision.status() {
            return Err(RepoError::Conflict(format!(
                "request {} is already {}, cannot become {}",
                id, request.status, decision
            )));
        }
        Ok((request, changed))
    }

    async fn delete(&self, id: &RequestId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM requests WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete", e))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo_in(dir: &tempfile::TempDir) -> SqliteRequestRepo {
        let path = dir.path().join("requests.db");
        SqliteRequestRepo::new(path.to_str().unwrap()).await.unwrap()
    }

    #[tokio::test]
    async fn persists_requests_across_connections() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::new("Ada", "2024-07-27", "Vacation").unwrap();

        repo_in(&dir).await.insert(&request).await.unwrap();

        let reopened = repo_in(&dir).await;
        assert_eq!(reopened.get(&request.id).await.unwrap(), Some(request));
    }

    #[tokio::test]
    async fn status_updates_are_stored() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir).await;
        let request = Request::new("Ada", "2024-07-27", "Vacation").unwrap();
        repo.insert(&request).await.unwrap();

        let (decided, changed) = repo
            .apply_decision(&request.id, Decision::Denied)
            .await
            .unwrap();
        assert!(changed);
        assert_eq!(decided.status, RequestStatus::Denied);

        let stored = repo.get(&request.id).await.unwrap().unwrap();
        assert_eq!(stored.status, RequestStatus::Denied);
    }

    #[tokio::test]
    async fn decided_rows_only_accept_the_same_decision() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir).await;
        let request = Request::new("Ada", "2024-07-27", "Vacation").unwrap();
        repo.insert(&request).await.unwrap();
        repo.apply_decision(&request.id, Decision::Accepted)
            .await
            .unwrap();

        let (_, changed) = repo
            .apply_decision(&request.id, Decision::Accepted)
            .await
            .unwrap();
        assert!(!changed);

        let err = repo
            .apply_decision(&request.id, Decision::Denied)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Conflict(_)));
        assert_eq!(
            repo.get(&request.id).await.unwrap().unwrap().status,
            RequestStatus::Accepted
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_opposite_decisions_store_exactly_one() {
        let dir = tempfile::tempdir().unwrap();
        let repo = std::sync::Arc::new(repo_in(&dir).await);
        let request = Request::new("Ada", "2024-07-27", "Vacation").unwrap();
        repo.insert(&request).await.unwrap();

        let accept = tokio::spawn({
            let repo = repo.clone();
            let id = request.id.clone();
            async move { repo.apply_decision(&id, Decision::Accepted).await }
        });
        let deny = tokio::spawn({
            let repo = repo.clone();
            let id = request.id.clone();
            async move { repo.apply_decision(&id, Decision::Denied).await }
        });
        let results = [accept.await.unwrap(), deny.await.unwrap()];

        let winners: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        assert_eq!(winners.len(), 1);
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(RepoError::Conflict(_)))));

        let stored = repo.get(&request.id).await.unwrap().unwrap();
        assert_eq!(stored.status, winners[0].0.status);
    }

    #[tokio::test]
    async fn unknown_ids_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir).await;
        let missing = RequestId::generate();

        assert!(matches!(
            repo.apply_decision(&missing, Decision::Accepted).await,
            Err(RepoError::NotFound(_))
        ));
        assert!(!repo.delete(&missing).await.unwrap());
    }

    #[tokio::test]
    async fn list_is_ordered_by_submission() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir).await;
        let first = Request::new("Ada", "2024-07-27", "Vacation").unwrap();
        let second = Request::new("Grace", "2024-07-28", "Conference").unwrap();
        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed, vec![first, second]);
    }
}
