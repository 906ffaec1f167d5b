use std::sync::Arc;

use crate::llm_client::TextModel;
use crate::signals::SignalFetcher;
use crate::store::ReportStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// File-only or tiered, chosen at startup from `DATABASE_URL`.
    pub store: Arc<dyn ReportStore>,
    /// `LlmClient` when an API key is configured, `DisabledModel` otherwise.
    pub model: Arc<dyn TextModel>,
    pub fetcher: SignalFetcher,
}
