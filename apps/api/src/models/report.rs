use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::skills::Skills;

/// Categorical reading of the authenticity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthenticityLevel {
    High,
    Medium,
    Low,
}

impl AuthenticityLevel {
    /// `> 75` is High, `> 45` is Medium, anything else (45 included) is Low.
    pub fn from_score(score: u8) -> Self {
        if score > 75 {
            AuthenticityLevel::High
        } else if score > 45 {
            AuthenticityLevel::Medium
        } else {
            AuthenticityLevel::Low
        }
    }
}

/// Where GitHub numbers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GithubSource {
    Live,
    Simulated,
}

/// GitHub activity snapshot attached to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubMonitoring {
    pub username: String,
    pub source: GithubSource,
    pub total_commits: u32,
    pub repo_count: u32,
    pub stars: u32,
    pub languages: Vec<String>,
    pub contribution_consistency: u8,
    pub complexity_score: u8,
    pub collaboration_score: u8,
    pub authenticity_score: u8,
    pub risks: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
}

/// Resume claims checked against GitHub evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeComparison {
    pub ats_score: u8,
    pub confidence: u8,
    pub proficiency: Proficiency,
    pub overlap_skills: Vec<String>,
    pub resume_only_skills: Vec<String>,
    pub github_only_skills: Vec<String>,
    pub match_score: u8,
    pub summary: Vec<String>,
}

/// The persisted result of one analysis. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateReport {
    pub id: Uuid,
    pub name: String,
    pub profile_url: String,
    pub score: u8,
    pub authenticity_level: AuthenticityLevel,
    pub skills: Skills,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub risks: Vec<String>,
    pub questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_monitoring: Option<GithubMonitoring>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_comparison: Option<ResumeComparison>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(AuthenticityLevel::from_score(100), AuthenticityLevel::High);
        assert_eq!(AuthenticityLevel::from_score(76), AuthenticityLevel::High);
        assert_eq!(AuthenticityLevel::from_score(75), AuthenticityLevel::Medium);
        assert_eq!(AuthenticityLevel::from_score(46), AuthenticityLevel::Medium);
        assert_eq!(AuthenticityLevel::from_score(45), AuthenticityLevel::Low);
        assert_eq!(AuthenticityLevel::from_score(0), AuthenticityLevel::Low);
    }

    #[test]
    fn test_level_is_total_over_score_range() {
        for score in 0..=100u8 {
            let level = AuthenticityLevel::from_score(score);
            let expected = if score > 75 {
                AuthenticityLevel::High
            } else if score > 45 {
                AuthenticityLevel::Medium
            } else {
                AuthenticityLevel::Low
            };
            assert_eq!(level, expected, "score {score}");
        }
    }

    #[test]
    fn test_report_uses_camel_case_keys() {
        let report = CandidateReport {
            id: Uuid::new_v4(),
            name: "octocat".to_string(),
            profile_url: "https://github.com/octocat".to_string(),
            score: 60,
            authenticity_level: AuthenticityLevel::Medium,
            skills: Skills::default(),
            strengths: vec![],
            weaknesses: vec![],
            risks: vec![],
            questions: vec![],
            github_monitoring: None,
            resume_comparison: None,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["profileUrl"], "https://github.com/octocat");
        assert_eq!(value["authenticityLevel"], "Medium");
        assert!(value.get("githubMonitoring").is_none());
    }
}
