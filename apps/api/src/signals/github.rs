//! GitHub profile signals.
//!
//! Live data comes from a single GraphQL request (commit contributions, the
//! contribution calendar, pull requests and owned repositories). Without a
//! token, or when the request fails, a deterministic profile derived from the
//! username length stands in.

use std::collections::HashMap;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::report::GithubSource;
use crate::scoring::tables::language_hits;
use crate::signals::{FetchError, GithubSignals, LanguageUsage};

const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Repository disk usage (KB) that maps to a complexity score of 100.
const COMPLEXITY_SATURATION_KB: f64 = 5000.0;

const PROFILE_QUERY: &str = r#"
query($login: String!) {
  user(login: $login) {
    contributionsCollection {
      totalCommitContributions
      contributionCalendar { weeks { contributionDays { contributionCount } } }
    }
    pullRequests { totalCount }
    repositories(first: 100, ownerAffiliations: OWNER, isFork: false,
                 orderBy: {field: PUSHED_AT, direction: DESC}) {
      totalCount
      nodes { stargazerCount forkCount diskUsage primaryLanguage { name } }
    }
  }
}
"#;

// ────────────────────────────────────────────────────────────────────────────
// GraphQL response shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ProfileData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ProfileData {
    user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserNode {
    contributions_collection: ContributionsCollection,
    pull_requests: TotalCount,
    repositories: RepositoryConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    total_commit_contributions: u32,
    contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Deserialize)]
struct ContributionCalendar {
    weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionWeek {
    contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionDay {
    contribution_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TotalCount {
    total_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryConnection {
    total_count: u32,
    nodes: Vec<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    stargazer_count: u32,
    fork_count: u32,
    disk_usage: Option<u32>,
    primary_language: Option<LanguageNode>,
}

#[derive(Debug, Deserialize)]
struct LanguageNode {
    name: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Live lookup
// ────────────────────────────────────────────────────────────────────────────

pub async fn fetch_profile(
    client: &Client,
    token: &str,
    username: &str,
) -> Result<GithubSignals, FetchError> {
    let request = GraphQlRequest {
        query: PROFILE_QUERY,
        variables: json!({ "login": username }),
    };

    let response: GraphQlResponse = client
        .post(GITHUB_GRAPHQL_URL)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    if let Some(err) = response.errors.first() {
        return Err(FetchError::Github(err.message.clone()));
    }

    let user = response
        .data
        .and_then(|d| d.user)
        .ok_or_else(|| FetchError::Github(format!("user '{username}' not found")))?;

    Ok(signals_from_profile(username, user))
}

pub(crate) fn signals_from_profile(username: &str, user: UserNode) -> GithubSignals {
    let weeks = &user.contributions_collection.contribution_calendar.weeks;
    let active_weeks = weeks
        .iter()
        .filter(|w| w.contribution_days.iter().any(|d| d.contribution_count > 0))
        .count();
    let contribution_consistency = percent(active_weeks as f64, weeks.len() as f64);

    let repos = &user.repositories.nodes;
    let complexity_score = if repos.is_empty() {
        0
    } else {
        let total_kb: u64 = repos.iter().map(|r| r.disk_usage.unwrap_or(0) as u64).sum();
        let avg_kb = total_kb as f64 / repos.len() as f64;
        percent(avg_kb, COMPLEXITY_SATURATION_KB)
    };

    let forks: u32 = repos.iter().map(|r| r.fork_count).sum();
    let collaboration = user.pull_requests.total_count.saturating_mul(4) as u64 + forks as u64 * 2;
    let collaboration_score = collaboration.min(100) as u8;

    let mut by_language: HashMap<&str, u32> = HashMap::new();
    for repo in repos {
        if let Some(lang) = &repo.primary_language {
            *by_language.entry(lang.name.as_str()).or_default() += 1;
        }
    }
    let mut languages: Vec<LanguageUsage> = by_language
        .into_iter()
        .map(|(name, repos)| LanguageUsage {
            name: name.to_string(),
            repos,
        })
        .collect();
    languages.sort_by(|a, b| b.repos.cmp(&a.repos).then_with(|| a.name.cmp(&b.name)));

    GithubSignals {
        username: username.to_string(),
        source: GithubSource::Live,
        total_commits: user.contributions_collection.total_commit_contributions,
        repo_count: user.repositories.total_count,
        stars: repos.iter().map(|r| r.stargazer_count).sum(),
        language_hits: language_hits(&languages),
        languages,
        contribution_consistency,
        complexity_score,
        collaboration_score,
    }
}

fn percent(part: f64, whole: f64) -> u8 {
    if whole <= 0.0 {
        return 0;
    }
    ((part / whole) * 100.0).round().clamp(0.0, 100.0) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Simulated profile
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic stand-in keyed by username length. Same name, same numbers.
pub fn simulated_signals(username: &str) -> GithubSignals {
    let seed = username.chars().count() as u32;
    let repo_count = 3 + seed % 12;
    let per_language = (repo_count / 3).max(1);
    let languages: Vec<LanguageUsage> = ["TypeScript", "Python", "SQL"]
        .into_iter()
        .map(|name| LanguageUsage {
            name: name.to_string(),
            repos: per_language,
        })
        .collect();

    GithubSignals {
        username: username.to_string(),
        source: GithubSource::Simulated,
        total_commits: 20 + (seed * 7) % 220,
        repo_count,
        stars: seed % 7,
        language_hits: language_hits(&languages),
        languages,
        contribution_consistency: (40 + (seed * 9) % 60) as u8,
        complexity_score: (45 + (seed * 11) % 55) as u8,
        collaboration_score: (35 + (seed * 13) % 65) as u8,
    }
}
