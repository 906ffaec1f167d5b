//! The `/analyze` pipeline: extract → score → aggregate → detect risks →
//! resume comparison → insights → assemble the report.
//!
//! Persisting is left to the handler so the pipeline stays storage-free.

use anyhow::anyhow;
use chrono::Utc;
use reqwest::Url;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::insights::dedup::merge_unique;
use crate::insights::{generate_insights, MAX_RISKS};
use crate::llm_client::TextModel;
use crate::models::report::{CandidateReport, GithubMonitoring};
use crate::scoring::authenticity::{aggregate, score_github_path, score_url_path};
use crate::scoring::resume::compare_resume;
use crate::scoring::risks::{detect_risks, github_risks, NO_RISKS};
use crate::signals::page::{display_name, github_username_from_url, normalize_url};
use crate::signals::{GithubSignals, PageSignals, SignalFetcher};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Portfolio or GitHub profile URL.
    pub url: Option<String>,
    /// Separate GitHub profile to monitor alongside a portfolio URL.
    pub github_url: Option<String>,
    pub resume_text: Option<String>,
}

/// Where the evidence for one analysis comes from.
#[derive(Debug)]
struct Sources {
    profile_url: String,
    page_url: Option<Url>,
    github_username: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validates the request and decides which extractors to run.
///
/// A `github.com/<user>` value in `url` is analyzed from GitHub alone; any
/// other http(s) URL is crawled. `githubUrl` adds GitHub monitoring and must
/// name an account.
fn resolve_sources(req: &AnalyzeRequest) -> Result<Sources, AppError> {
    let url = non_blank(req.url.as_deref());
    let github_url = non_blank(req.github_url.as_deref());

    let extra_username = match github_url {
        Some(raw) => Some(github_username_from_url(raw).ok_or_else(|| {
            AppError::Validation("Invalid GitHub URL format".to_string())
        })?),
        None => None,
    };

    match (url, github_url) {
        (Some(raw), _) => {
            let parsed = normalize_url(raw)?;
            let profile_url = parsed.to_string();
            if let Some(username) = github_username_from_url(parsed.as_str())
                .filter(|_| is_github_host(&parsed))
            {
                return Ok(Sources {
                    profile_url,
                    page_url: None,
                    github_username: extra_username.or(Some(username)),
                });
            }
            Ok(Sources {
                profile_url,
                page_url: Some(parsed),
                github_username: extra_username,
            })
        }
        (None, Some(raw)) => Ok(Sources {
            profile_url: raw.to_string(),
            page_url: None,
            github_username: extra_username,
        }),
        (None, None) => Err(AppError::Validation(
            "Missing url: provide a profile URL or githubUrl".to_string(),
        )),
    }
}

fn is_github_host(url: &Url) -> bool {
    matches!(url.host_str(), Some("github.com" | "www.github.com"))
}

fn monitoring_record(github: &GithubSignals, authenticity_score: u8) -> GithubMonitoring {
    GithubMonitoring {
        username: github.username.clone(),
        source: github.source,
        total_commits: github.total_commits,
        repo_count: github.repo_count,
        stars: github.stars,
        languages: github.language_names(),
        contribution_consistency: github.contribution_consistency,
        complexity_score: github.complexity_score,
        collaboration_score: github.collaboration_score,
        authenticity_score,
        risks: github_risks(github),
    }
}

/// Detected flags first, then insight risks. The "no risks" placeholder is
/// only kept when nothing else remains.
fn final_risks(detected: &[String], from_insights: &[String]) -> Vec<String> {
    let detected: Vec<String> = detected
        .iter()
        .filter(|r| r.as_str() != NO_RISKS)
        .cloned()
        .collect();
    let mut risks = merge_unique(&[detected.as_slice(), from_insights], MAX_RISKS);
    if risks.is_empty() {
        risks.push(NO_RISKS.to_string());
    }
    risks
}

/// Runs one analysis end to end and returns the unsaved report.
pub async fn analyze(
    fetcher: &SignalFetcher,
    model: &dyn TextModel,
    req: &AnalyzeRequest,
) -> Result<CandidateReport, AppError> {
    let sources = resolve_sources(req)?;
    info!(
        "Analyzing {} (page: {}, github: {})",
        sources.profile_url,
        sources.page_url.is_some(),
        sources.github_username.as_deref().unwrap_or("-")
    );

    let page: Option<PageSignals> = match &sources.page_url {
        Some(url) => Some(fetcher.page(url).await),
        None => None,
    };
    let github: Option<GithubSignals> = match &sources.github_username {
        Some(username) => Some(fetcher.github(username).await),
        None => None,
    };

    let url_path = page.as_ref().map(score_url_path);
    let github_path = github.as_ref().map(score_github_path);
    let result = aggregate(url_path, github_path)
        .ok_or_else(|| anyhow!("no evidence source resolved for {}", sources.profile_url))?;

    let detected = detect_risks(page.as_ref(), github.as_ref(), &result.skills);
    let monitoring = github
        .as_ref()
        .zip(github_path)
        .map(|(g, path)| monitoring_record(g, path.score));
    let resume_comparison = compare_resume(req.resume_text.as_deref(), github.as_ref(), &result.skills);

    let insights = generate_insights(model, &result.skills, result.score, monitoring.as_ref()).await;

    let name = match (&sources.page_url, &page, &sources.github_username) {
        (Some(url), Some(page), _) => display_name(url, &page.title),
        (_, _, Some(username)) => username.clone(),
        _ => sources.profile_url.clone(),
    };

    info!(
        "Scored {name}: {} ({:?})",
        result.score, result.authenticity_level
    );

    Ok(CandidateReport {
        id: Uuid::new_v4(),
        name,
        profile_url: sources.profile_url,
        score: result.score,
        authenticity_level: result.authenticity_level,
        skills: result.skills,
        strengths: insights.strengths,
        weaknesses: insights.weaknesses,
        risks: final_risks(&detected, &insights.risks),
        questions: insights.questions,
        github_monitoring: monitoring,
        resume_comparison,
        created_at: Utc::now(),
    })
}
