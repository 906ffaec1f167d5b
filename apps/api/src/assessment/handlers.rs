//! Axum route handlers for the Assessment API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::warn;

use crate::assessment::compare::{compare_candidates, CompareRequest, Recommendation};
use crate::assessment::hiring_test::{generate_hiring_test, HiringTest, HiringTestRequest};
use crate::state::AppState;

/// POST /hiring-test
///
/// Always 200: an undecodable body is treated as an empty candidate summary,
/// and model failures are answered with the fixed fallback test.
pub async fn handle_hiring_test(
    State(state): State<AppState>,
    body: Result<Json<HiringTestRequest>, JsonRejection>,
) -> Json<HiringTest> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Unreadable hiring-test body ({}); using empty summary", rejection.body_text());
            HiringTestRequest::default()
        }
    };
    Json(generate_hiring_test(state.model.as_ref(), &request).await)
}

/// POST /compare
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Json<Recommendation> {
    Json(compare_candidates(state.model.as_ref(), &request).await)
}
