pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::assessment::handlers as assessment;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis
        .route("/analyze", post(analysis::handle_analyze))
        .route("/candidate/:id", get(analysis::handle_get_candidate))
        .route("/candidates", get(analysis::handle_list_candidates))
        // Assessment
        .route("/hiring-test", post(assessment::handle_hiring_test))
        .route("/compare", post(assessment::handle_compare))
        .with_state(state)
}
