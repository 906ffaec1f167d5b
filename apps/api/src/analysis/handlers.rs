//! Axum route handlers for candidate analysis and report lookup.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::analysis::pipeline::{analyze, AnalyzeRequest};
use crate::errors::AppError;
use crate::models::report::CandidateReport;
use crate::state::AppState;

/// POST /analyze
///
/// Runs the full pipeline, persists the report, and returns it.
/// Any body that does not decode is a 400, like a missing URL.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<CandidateReport>, AppError> {
    let Json(request) =
        body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let report = analyze(&state.fetcher, state.model.as_ref(), &request).await?;
    state.store.save(&report).await?;
    info!("Candidate {} saved as {}", report.name, report.id);
    Ok(Json(report))
}

/// GET /candidate/:id
///
/// Ids that are not UUIDs cannot have been issued, so they are a 404 too.
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CandidateReport>, AppError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::NotFound(format!("Candidate {id} not found")))?;
    let report = state.store.get(id).await?;
    Ok(Json(report))
}

/// GET /candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateReport>>, AppError> {
    let reports = state.store.list().await?;
    Ok(Json(reports))
}
