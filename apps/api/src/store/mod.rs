//! Report Store: the only owner of persisted `CandidateReport`s.
//!
//! Reports are write-once: there is `save`, `get`, `list`, and no update.
//! `AppState` carries an `Arc<dyn ReportStore>` chosen at startup:
//! - `JsonFileStore` when no database is configured
//! - `TieredStore` (Postgres first, JSON file second) when one is

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::report::CandidateReport;

pub mod file;
pub mod postgres;
pub mod tiered;

pub use file::JsonFileStore;
pub use postgres::PgReportStore;
pub use tiered::TieredStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("report {0} not found")]
    NotFound(Uuid),

    #[error("store is closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("all backing stores failed: {0}")]
    AllBackendsFailed(String),
}

#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn save(&self, report: &CandidateReport) -> Result<(), StoreError>;

    /// Fails with [`StoreError::NotFound`] for ids never saved.
    async fn get(&self, id: Uuid) -> Result<CandidateReport, StoreError>;

    /// Every report, most recent first.
    async fn list(&self) -> Result<Vec<CandidateReport>, StoreError>;

    /// Releases backing resources. Later calls fail with [`StoreError::Closed`].
    async fn close(&self);
}

/// Most recent first; equal timestamps keep later-saved entries first.
pub(crate) fn newest_first(mut reports: Vec<CandidateReport>) -> Vec<CandidateReport> {
    reports.reverse();
    reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    reports
}

#[cfg(test)]
pub(crate) mod testing {
    use chrono::{Duration, Utc};

    use crate::models::report::{AuthenticityLevel, CandidateReport};
    use crate::models::skills::Skills;
    use uuid::Uuid;

    /// A report created `age_secs` seconds ago.
    pub fn report_aged(name: &str, age_secs: i64) -> CandidateReport {
        CandidateReport {
            id: Uuid::new_v4(),
            name: name.to_string(),
            profile_url: format!("https://{name}.dev"),
            score: 50,
            authenticity_level: AuthenticityLevel::Medium,
            skills: Skills::default(),
            strengths: vec!["s".to_string()],
            weaknesses: vec!["w".to_string()],
            risks: vec!["r".to_string()],
            questions: vec!["q".to_string()],
            github_monitoring: None,
            resume_comparison: None,
            created_at: Utc::now() - Duration::seconds(age_secs),
        }
    }
}
