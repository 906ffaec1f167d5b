//! Heuristic risk flags derived directly from signals.

use crate::models::report::GithubSource;
use crate::models::skills::Skills;
use crate::signals::{GithubSignals, PageSignals};

pub const COULD_NOT_CRAWL: &str =
    "Could not crawl URL content; analysis used URL fallback signals.";
pub const THIN_CONTENT: &str = "Very low content depth can reduce confidence in score accuracy.";
pub const MINIMAL_TESTING: &str = "Minimal testing signals detected.";
pub const LOW_ACTIVITY: &str = "Low development activity";
pub const COMPLEXITY_SPIKE: &str = "Sudden complexity spike detected";
pub const SIMULATED_GITHUB: &str =
    "GitHub metrics are simulated; live profile data was unavailable.";
pub const NO_RISKS: &str = "No major risk flags detected from available evidence.";

const THIN_CONTENT_WORDS: u32 = 120;
const LOW_ACTIVITY_COMMITS: u32 = 20;

/// GitHub-only flags, also attached to the monitoring sub-record.
pub fn github_risks(github: &GithubSignals) -> Vec<String> {
    let mut risks = Vec::new();
    if github.total_commits < LOW_ACTIVITY_COMMITS {
        risks.push(LOW_ACTIVITY.to_string());
    }
    if github.complexity_score > 90 && github.contribution_consistency < 30 {
        risks.push(COMPLEXITY_SPIKE.to_string());
    }
    if github.source == GithubSource::Simulated {
        risks.push(SIMULATED_GITHUB.to_string());
    }
    risks
}

/// All flags in a fixed order. Never empty.
pub fn detect_risks(
    page: Option<&PageSignals>,
    github: Option<&GithubSignals>,
    skills: &Skills,
) -> Vec<String> {
    let mut risks = Vec::new();

    if let Some(page) = page {
        if !page.fetched {
            risks.push(COULD_NOT_CRAWL.to_string());
        }
        if page.word_count < THIN_CONTENT_WORDS {
            risks.push(THIN_CONTENT.to_string());
        }
    }
    if skills.testing <= 2 {
        risks.push(MINIMAL_TESTING.to_string());
    }
    if let Some(github) = github {
        risks.extend(github_risks(github));
    }

    if risks.is_empty() {
        risks.push(NO_RISKS.to_string());
    }
    risks
}
