//! Resume vs GitHub comparison.
//!
//! Resume claims are keyword-detected; GitHub evidence is the profile's
//! languages plus the headline keywords of every dimension the candidate
//! scored well on. The two sets are compared for overlap.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::report::{Proficiency, ResumeComparison};
use crate::models::skills::{SkillDimension, Skills};
use crate::signals::GithubSignals;

/// Number of detected resume keywords that counts as full coverage.
const FULL_COVERAGE_KEYWORDS: f64 = 14.0;
const LONG_RESUME_CHARS: usize = 400;
/// Dimensions at or above this score contribute GitHub-side keywords.
const STRONG_DIMENSION: u8 = 5;

static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(project|experience|skills|education)\b").expect("valid regex")
});

fn resume_keywords(dim: SkillDimension) -> &'static [&'static str] {
    match dim {
        SkillDimension::Frontend => &[
            "react",
            "next",
            "javascript",
            "typescript",
            "css",
            "html",
            "vite",
            "redux",
        ],
        SkillDimension::Backend => &[
            "node", "express", "api", "rest", "graphql", "java", "spring", "django", "flask",
        ],
        SkillDimension::Dsa => &[
            "algorithm",
            "data structure",
            "leetcode",
            "binary tree",
            "graph",
            "dp",
            "complexity",
        ],
        SkillDimension::System => &[
            "architecture",
            "scalable",
            "microservice",
            "distributed",
            "kafka",
            "load balancer",
        ],
        SkillDimension::Testing => &[
            "jest",
            "unit test",
            "integration test",
            "e2e",
            "cypress",
            "qa",
            "pytest",
        ],
    }
}

fn push_unique(set: &mut Vec<String>, value: String) {
    if !set.contains(&value) {
        set.push(value);
    }
}

fn detect_resume_skills(text: &str) -> Vec<String> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    let mut detected = Vec::new();
    for dim in SkillDimension::ALL {
        for keyword in resume_keywords(dim) {
            if normalized.contains(keyword) {
                push_unique(&mut detected, keyword.to_string());
            }
        }
    }
    detected
}

fn detect_github_skills(languages: &[String], skills: &Skills) -> Vec<String> {
    let mut detected = Vec::new();
    for lang in languages {
        push_unique(&mut detected, lang.to_lowercase());
    }
    for dim in SkillDimension::ALL {
        if skills.get(dim) >= STRONG_DIMENSION {
            for keyword in resume_keywords(dim).iter().take(2) {
                push_unique(&mut detected, keyword.to_string());
            }
        }
    }
    detected
}

fn pct(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Returns `None` when no resume text was supplied.
pub fn compare_resume(
    resume_text: Option<&str>,
    github: Option<&GithubSignals>,
    skills: &Skills,
) -> Option<ResumeComparison> {
    let resume_text = resume_text.map(str::trim).filter(|t| !t.is_empty())?;

    let languages = github.map(|g| g.language_names()).unwrap_or_default();
    let consistency = github.map(|g| g.contribution_consistency).unwrap_or(0);

    let resume_skills = detect_resume_skills(resume_text);
    let github_skills = detect_github_skills(&languages, skills);

    let overlap_skills: Vec<String> = resume_skills
        .iter()
        .filter(|s| github_skills.contains(s))
        .cloned()
        .collect();
    let resume_only_skills: Vec<String> = resume_skills
        .iter()
        .filter(|s| !github_skills.contains(s))
        .cloned()
        .collect();
    let github_only_skills: Vec<String> = github_skills
        .iter()
        .filter(|s| !resume_skills.contains(s))
        .cloned()
        .collect();

    let union_size = resume_skills.len() + github_only_skills.len();
    let match_score = if union_size == 0 {
        0
    } else {
        pct(overlap_skills.len() as f64 / union_size as f64 * 100.0)
    };

    let coverage = pct(resume_skills.len() as f64 / FULL_COVERAGE_KEYWORDS * 100.0);
    let structure_bonus = if SECTION_RE.is_match(resume_text) { 10.0 } else { 0.0 };
    let length_bonus = if resume_text.chars().count() >= LONG_RESUME_CHARS {
        10.0
    } else {
        0.0
    };
    let ats_score = pct(
        (coverage as f64 * 0.7 + match_score as f64 * 0.2).round() + structure_bonus + length_bonus,
    );

    let confidence = pct(
        match_score as f64 * 0.45
            + consistency as f64 * 0.35
            + (resume_skills.len() as f64 * 2.0).min(20.0),
    );

    let proficiency = if confidence >= 75 {
        Proficiency::Advanced
    } else if confidence >= 45 {
        Proficiency::Intermediate
    } else {
        Proficiency::Beginner
    };

    let overlap_line = if overlap_skills.is_empty() {
        "No strong overlap found between resume and GitHub signals.".to_string()
    } else {
        format!(
            "Strong overlap: {}.",
            overlap_skills.iter().take(5).cloned().collect::<Vec<_>>().join(", ")
        )
    };

    Some(ResumeComparison {
        ats_score,
        confidence,
        proficiency,
        summary: vec![
            format!("ATS score is {ats_score} based on resume keyword coverage and structure."),
            format!("Confidence is {confidence} with GitHub/Resume match at {match_score}%."),
            overlap_line,
        ],
        overlap_skills,
        resume_only_skills,
        github_only_skills,
        match_score,
    })
}
