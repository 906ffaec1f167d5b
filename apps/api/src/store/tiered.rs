//! Write-through pair of stores: a hosted table and a local file.
//!
//! Writes go to both; one side failing is logged and tolerated, both failing
//! is an error. Reads prefer the hosted side and fall back to the file on any
//! error, and on not-found (the report may only have reached the file).
//! There is no cross-store transaction.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::models::report::CandidateReport;
use crate::store::{ReportStore, StoreError};

pub struct TieredStore {
    hosted: Arc<dyn ReportStore>,
    local: Arc<dyn ReportStore>,
}

impl TieredStore {
    pub fn new(hosted: Arc<dyn ReportStore>, local: Arc<dyn ReportStore>) -> Self {
        Self { hosted, local }
    }
}

#[async_trait]
impl ReportStore for TieredStore {
    async fn save(&self, report: &CandidateReport) -> Result<(), StoreError> {
        let hosted = self.hosted.save(report).await;
        let local = self.local.save(report).await;

        match (hosted, local) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(e), Ok(())) => {
                warn!("Hosted save failed for report {}: {e}; kept in file only", report.id);
                Ok(())
            }
            (Ok(()), Err(e)) => {
                warn!("File save failed for report {}: {e}; kept in hosted table only", report.id);
                Ok(())
            }
            (Err(hosted_err), Err(local_err)) => Err(StoreError::AllBackendsFailed(format!(
                "hosted: {hosted_err}; file: {local_err}"
            ))),
        }
    }

    async fn get(&self, id: Uuid) -> Result<CandidateReport, StoreError> {
        match self.hosted.get(id).await {
            Ok(report) => Ok(report),
            Err(StoreError::NotFound(_)) => self.local.get(id).await,
            Err(e) => {
                warn!("Hosted read of report {id} failed: {e}; reading file");
                self.local.get(id).await
            }
        }
    }

    async fn list(&self) -> Result<Vec<CandidateReport>, StoreError> {
        match self.hosted.list().await {
            Ok(reports) => Ok(reports),
            Err(e) => {
                warn!("Hosted list failed: {e}; reading file");
                self.local.list().await
            }
        }
    }

    async fn close(&self) {
        self.hosted.close().await;
        self.local.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::report_aged;
    use crate::store::JsonFileStore;

    /// A hosted side that is always down.
    struct Unreachable;

    #[async_trait]
    impl ReportStore for Unreachable {
        async fn save(&self, _report: &CandidateReport) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("connection refused")))
        }
        async fn get(&self, _id: Uuid) -> Result<CandidateReport, StoreError> {
            Err(StoreError::Io(std::io::Error::other("connection refused")))
        }
        async fn list(&self) -> Result<Vec<CandidateReport>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("connection refused")))
        }
        async fn close(&self) {}
    }

    async fn file_store(dir: &tempfile::TempDir, name: &str) -> Arc<dyn ReportStore> {
        Arc::new(JsonFileStore::open(dir.path().join(name)).await.unwrap())
    }

    #[tokio::test]
    async fn test_hosted_outage_falls_back_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = TieredStore::new(Arc::new(Unreachable), file_store(&dir, "local.json").await);
        let report = report_aged("ada", 0);

        store.save(&report).await.unwrap();
        assert_eq!(store.get(report.id).await.unwrap(), report);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_both_sides_down_is_an_error() {
        let store = TieredStore::new(Arc::new(Unreachable), Arc::new(Unreachable));
        assert!(matches!(
            store.save(&report_aged("x", 0)).await,
            Err(StoreError::AllBackendsFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_writes_reach_both_sides() {
        let dir = tempfile::tempdir().unwrap();
        let hosted = file_store(&dir, "hosted.json").await;
        let local = file_store(&dir, "local.json").await;
        let store = TieredStore::new(hosted.clone(), local.clone());
        let report = report_aged("grace", 0);

        store.save(&report).await.unwrap();
        assert!(hosted.get(report.id).await.is_ok());
        assert!(local.get(report.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_checks_file_when_hosted_misses() {
        let dir = tempfile::tempdir().unwrap();
        let hosted = file_store(&dir, "hosted.json").await;
        let local = file_store(&dir, "local.json").await;
        let report = report_aged("only-local", 0);
        local.save(&report).await.unwrap();

        let store = TieredStore::new(hosted, local);
        assert_eq!(store.get(report.id).await.unwrap(), report);
        assert!(matches!(
            store.get(Uuid::new_v4()).await,
            Err(StoreError::NotFound(_))
        ));
    }
}
