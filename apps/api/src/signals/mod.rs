//! Signal Extractor: reduces a profile URL or a GitHub account to countable facts.
//!
//! Every outbound call here is a single attempt with a fixed timeout. Failures
//! never propagate: a page that cannot be fetched degrades to URL-only signals,
//! a GitHub profile that cannot be read degrades to the simulated profile.

use std::time::Duration;

use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::report::GithubSource;
use crate::models::skills::SkillDimension;

pub mod github;
pub mod page;

const USER_AGENT: &str = "HireProof-Automation/1.0";

/// Upper bound on the page body we are willing to read.
pub const MAX_PAGE_BYTES: usize = 1_000_000;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response exceeded {limit} bytes")]
    TooLarge { limit: usize },

    #[error("GitHub API error: {0}")]
    Github(String),
}

/// Indicator coverage for one skill dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionHits {
    /// Distinct indicators present at least once.
    pub matched: u32,
    /// Occurrences across all indicators.
    pub total_hits: u32,
    pub table_size: u32,
}

/// [`DimensionHits`] for all five dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillHits([DimensionHits; 5]);

impl SkillHits {
    pub fn from_fn(mut f: impl FnMut(SkillDimension) -> DimensionHits) -> Self {
        let mut hits = [DimensionHits::default(); 5];
        for dim in SkillDimension::ALL {
            hits[dim.index()] = f(dim);
        }
        SkillHits(hits)
    }

    pub fn get(&self, dim: SkillDimension) -> DimensionHits {
        self.0[dim.index()]
    }
}

/// What we learned from a portfolio page.
#[derive(Debug, Clone)]
pub struct PageSignals {
    pub title: String,
    /// Markup-free, lower-cased page text.
    pub text: String,
    pub word_count: u32,
    pub link_count: u32,
    pub keyword_hits: SkillHits,
    /// False when the page could not be read and the URL itself stood in for it.
    pub fetched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageUsage {
    pub name: String,
    pub repos: u32,
}

/// What we learned from a GitHub account.
#[derive(Debug, Clone)]
pub struct GithubSignals {
    pub username: String,
    pub source: GithubSource,
    pub total_commits: u32,
    pub repo_count: u32,
    pub stars: u32,
    /// Most used first.
    pub languages: Vec<LanguageUsage>,
    pub language_hits: SkillHits,
    pub contribution_consistency: u8,
    pub complexity_score: u8,
    pub collaboration_score: u8,
}

impl GithubSignals {
    pub fn language_names(&self) -> Vec<String> {
        self.languages.iter().map(|l| l.name.clone()).collect()
    }
}

/// Owns the outbound HTTP client used for page and GitHub extraction.
#[derive(Clone)]
pub struct SignalFetcher {
    client: Client,
    github_token: Option<String>,
}

impl SignalFetcher {
    pub fn new(timeout: Duration, github_token: Option<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            github_token,
        })
    }

    /// Fetches and reduces a page. Never fails: unreachable pages yield
    /// degraded signals built from the URL string.
    pub async fn page(&self, url: &Url) -> PageSignals {
        match page::fetch_html(&self.client, url, MAX_PAGE_BYTES).await {
            Ok(html) => {
                let signals = page::signals_from_html(&html);
                info!(
                    "Fetched {}: {} words, {} links",
                    url, signals.word_count, signals.link_count
                );
                signals
            }
            Err(e) => {
                warn!("Could not fetch {url}: {e}; using URL fallback signals");
                page::fallback_signals(url.as_str())
            }
        }
    }

    /// Reads a GitHub profile. Never fails: without a token, or when the API
    /// call does not succeed, the simulated profile keyed by username is used.
    pub async fn github(&self, username: &str) -> GithubSignals {
        let Some(token) = self.github_token.as_deref() else {
            info!("No GitHub token configured; simulating metrics for {username}");
            return github::simulated_signals(username);
        };

        match github::fetch_profile(&self.client, token, username).await {
            Ok(signals) => {
                info!(
                    "GitHub profile {}: {} repos, {} commits",
                    username, signals.repo_count, signals.total_commits
                );
                signals
            }
            Err(e) => {
                warn!("GitHub lookup for {username} failed: {e}; using simulated metrics");
                github::simulated_signals(username)
            }
        }
    }
}
