//! Authenticity Aggregator: turns skills and raw signal magnitudes into a
//! 0–100 score and a categorical level.

use crate::models::report::AuthenticityLevel;
use crate::models::skills::Skills;
use crate::scoring::skills::{score_github, score_page};
use crate::signals::{GithubSignals, PageSignals};

/// Weight of the URL-derived score when both paths are available.
const URL_WEIGHT: f64 = 0.6;
const GITHUB_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u8,
    pub authenticity_level: AuthenticityLevel,
    pub skills: Skills,
}

impl ScoreResult {
    fn new(score: u8, skills: Skills) -> Self {
        Self {
            score,
            authenticity_level: AuthenticityLevel::from_score(score),
            skills,
        }
    }
}

/// Score and skills from one evidence source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathScore {
    pub score: u8,
    pub skills: Skills,
}

fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// `avg_skill × 8 + content bonus`, the bonus capped at 20 points
/// (up to 12 for word count, up to 8 for links).
pub fn url_score(skills: &Skills, page: &PageSignals) -> u8 {
    let words = page.word_count.min(4000) as f64 / 4000.0 * 12.0;
    let links = page.link_count.min(20) as f64 * 0.4;
    let bonus = (words + links).round().clamp(0.0, 20.0);
    clamp_score(skills.average() * 8.0 + bonus)
}

/// Weighted blend of activity metrics plus a fixed 8-point baseline.
pub fn github_score(github: &GithubSignals) -> u8 {
    let commits = (github.total_commits as f64 / 5.0).min(100.0);
    clamp_score(
        0.30 * github.contribution_consistency as f64
            + 0.25 * github.complexity_score as f64
            + 0.20 * github.collaboration_score as f64
            + 0.15 * commits
            + 0.10 * 80.0,
    )
}

pub fn combine_scores(url: u8, github: u8) -> u8 {
    clamp_score(URL_WEIGHT * url as f64 + GITHUB_WEIGHT * github as f64)
}

pub fn score_url_path(page: &PageSignals) -> PathScore {
    let skills = score_page(page);
    PathScore {
        score: url_score(&skills, page),
        skills,
    }
}

pub fn score_github_path(github: &GithubSignals) -> PathScore {
    PathScore {
        score: github_score(github),
        skills: score_github(github),
    }
}

/// Combines whichever paths are present. `None` only when both are absent.
pub fn aggregate(url: Option<PathScore>, github: Option<PathScore>) -> Option<ScoreResult> {
    match (url, github) {
        (Some(u), Some(g)) => Some(ScoreResult::new(
            combine_scores(u.score, g.score),
            u.skills.merge(&g.skills),
        )),
        (Some(only), None) | (None, Some(only)) => Some(ScoreResult::new(only.score, only.skills)),
        (None, None) => None,
    }
}
