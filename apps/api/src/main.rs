mod analysis;
mod assessment;
mod config;
mod errors;
mod insights;
mod llm_client;
mod models;
mod routes;
mod scoring;
mod signals;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{DisabledModel, LlmClient, TextModel};
use crate::routes::build_router;
use crate::signals::SignalFetcher;
use crate::state::AppState;
use crate::store::{JsonFileStore, PgReportStore, ReportStore, TieredStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HireProof API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;
    let model = build_model(&config)?;

    let fetcher = SignalFetcher::new(config.fetch_timeout, config.github_token.clone())?;
    if config.github_token.is_none() {
        info!("GITHUB_TOKEN not set; GitHub metrics will be simulated");
    }

    let state = AppState {
        store: store.clone(),
        model,
        fetcher,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Shut down cleanly");
    Ok(())
}

/// File-only without `DATABASE_URL`; Postgres + file when it is set. A
/// database that cannot be reached at startup degrades to file-only.
async fn build_store(config: &Config) -> Result<Arc<dyn ReportStore>> {
    let file: Arc<dyn ReportStore> = Arc::new(JsonFileStore::open(&config.reports_path).await?);

    let Some(database_url) = config.database_url.as_deref() else {
        info!("DATABASE_URL not set; storing reports in {}", config.reports_path.display());
        return Ok(file);
    };

    match PgReportStore::connect(database_url).await {
        Ok(pg) => {
            info!("Report store: PostgreSQL with file copy");
            let tiered: Arc<dyn ReportStore> = Arc::new(TieredStore::new(Arc::new(pg), file));
            Ok(tiered)
        }
        Err(e) => {
            warn!("PostgreSQL unavailable ({e}); storing reports in file only");
            Ok(file)
        }
    }
}

fn build_model(config: &Config) -> Result<Arc<dyn TextModel>> {
    match config.anthropic_api_key.clone() {
        Some(key) => {
            let llm: Arc<dyn TextModel> = Arc::new(LlmClient::new(key, config.llm_timeout)?);
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Ok(llm)
        }
        None => {
            info!("ANTHROPIC_API_KEY not set; insights will use templates");
            let disabled: Arc<dyn TextModel> = Arc::new(DisabledModel);
            Ok(disabled)
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received");
}
