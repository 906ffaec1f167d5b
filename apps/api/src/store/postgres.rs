use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::models::report::CandidateReport;
use crate::store::{ReportStore, StoreError};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS candidate_reports (
    id          UUID PRIMARY KEY,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    report      JSONB NOT NULL
)
"#;

#[derive(Debug, FromRow)]
struct ReportRow {
    report: Json<CandidateReport>,
}

/// Hosted-table store: one JSONB row per report.
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    /// Connects and makes sure the table exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        sqlx::query(CREATE_TABLE).execute(&pool).await?;

        info!("PostgreSQL report store ready");
        Ok(Self { pool })
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.pool.is_closed() {
            return Err(StoreError::Closed);
        }
        Ok(())
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn save(&self, report: &CandidateReport) -> Result<(), StoreError> {
        self.ensure_open()?;
        sqlx::query("INSERT INTO candidate_reports (id, created_at, report) VALUES ($1, $2, $3)")
            .bind(report.id)
            .bind(report.created_at)
            .bind(Json(report))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<CandidateReport, StoreError> {
        self.ensure_open()?;
        let row = sqlx::query_as::<_, ReportRow>(
            "SELECT report FROM candidate_reports WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))?;
        Ok(row.report.0)
    }

    async fn list(&self) -> Result<Vec<CandidateReport>, StoreError> {
        self.ensure_open()?;
        let rows = sqlx::query_as::<_, ReportRow>(
            "SELECT report FROM candidate_reports ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|r| r.report.0).collect())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL report store closed");
    }
}
