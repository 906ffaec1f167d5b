//! Flat JSON-array file store.
//!
//! The whole collection lives in memory behind one async mutex, so writers
//! are serialized. Each save rewrites the file through a temp file + rename,
//! so a crash mid-write leaves the previous array intact.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::report::CandidateReport;
use crate::store::{newest_first, ReportStore, StoreError};

pub struct JsonFileStore {
    path: PathBuf,
    /// `None` once closed.
    reports: Mutex<Option<Vec<CandidateReport>>>,
}

impl JsonFileStore {
    /// Opens (or creates) the store at `path`. A missing file is an empty
    /// store; an unreadable or corrupt one is an error.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let reports = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        info!(
            "Opened report file {} ({} reports)",
            path.display(),
            reports.len()
        );

        Ok(Self {
            path,
            reports: Mutex::new(Some(reports)),
        })
    }

    async fn write_all(&self, reports: &[CandidateReport]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(reports)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ReportStore for JsonFileStore {
    async fn save(&self, report: &CandidateReport) -> Result<(), StoreError> {
        let mut guard = self.reports.lock().await;
        let reports = guard.as_mut().ok_or(StoreError::Closed)?;

        reports.push(report.clone());
        if let Err(e) = self.write_all(reports).await {
            reports.pop();
            warn!("Failed to write report file {}: {e}", self.path.display());
            return Err(e);
        }

        info!(
            "Report {} saved to {} (total: {})",
            report.id,
            self.path.display(),
            reports.len()
        );
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<CandidateReport, StoreError> {
        let guard = self.reports.lock().await;
        let reports = guard.as_ref().ok_or(StoreError::Closed)?;
        reports
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<CandidateReport>, StoreError> {
        let guard = self.reports.lock().await;
        let reports = guard.as_ref().ok_or(StoreError::Closed)?;
        Ok(newest_first(reports.clone()))
    }

    async fn close(&self) {
        self.reports.lock().await.take();
        info!("Closed report file {}", self.path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::report_aged;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("nested/candidates.json"))
            .await
            .unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_get_and_unknown_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("c.json")).await.unwrap();
        let report = report_aged("ada", 0);
        store.save(&report).await.unwrap();

        assert_eq!(store.get(report.id).await.unwrap(), report);
        assert!(matches!(
            store.get(Uuid::new_v4()).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_reports_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.json");
        let report = report_aged("grace", 0);
        {
            let store = JsonFileStore::open(&path).await.unwrap();
            store.save(&report).await.unwrap();
            store.close().await;
        }
        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(reopened.get(report.id).await.unwrap(), report);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("c.json")).await.unwrap();
        let older = report_aged("older", 60);
        let newer = report_aged("newer", 1);
        store.save(&older).await.unwrap();
        store.save(&newer).await.unwrap();

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn test_concurrent_saves_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.json");
        let store = Arc::new(JsonFileStore::open(&path).await.unwrap());

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.save(&report_aged(&format!("c{i}"), 0)).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(reopened.list().await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_closed_store_rejects_operations() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("c.json")).await.unwrap();
        store.close().await;
        assert!(matches!(
            store.save(&report_aged("late", 0)).await,
            Err(StoreError::Closed)
        ));
        assert!(matches!(store.list().await, Err(StoreError::Closed)));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.json");
        tokio::fs::write(&path, b"{ not an array").await.unwrap();
        assert!(matches!(
            JsonFileStore::open(&path).await,
            Err(StoreError::Serde(_))
        ));
    }
}
