use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Every upstream credential is optional: a missing AI key switches insight
/// generation to templates, a missing GitHub token switches GitHub signals to
/// the simulated profile, and a missing database URL runs the store file-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub github_token: Option<String>,
    pub database_url: Option<String>,
    pub reports_path: PathBuf,
    pub fetch_timeout: Duration,
    pub llm_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 5000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            github_token: optional_env("GITHUB_TOKEN"),
            database_url: optional_env("DATABASE_URL"),
            reports_path: optional_env("REPORTS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/candidates.json")),
            fetch_timeout: Duration::from_secs(parse_env("FETCH_TIMEOUT_SECS", 7)?),
            llm_timeout: Duration::from_secs(parse_env("LLM_TIMEOUT_SECS", 30)?),
        })
    }
}

/// Reads a variable, treating unset and blank values the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}
