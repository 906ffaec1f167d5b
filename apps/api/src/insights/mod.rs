//! Insight Generator: natural-language strengths, weaknesses, risks and
//! interview questions for a scored candidate.
//!
//! Flow: base AI call (or template) → GitHub automation AI call (or template,
//! only when GitHub data exists) → union, case-insensitive dedupe, truncate.
//! Nothing in here returns an error: every failure is logged and replaced by
//! the deterministic template for that call.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::insights::prompts::{
    GITHUB_INSIGHT_PROMPT_TEMPLATE, INSIGHT_PROMPT_TEMPLATE, INSIGHT_SYSTEM,
};
use crate::llm_client::prompts::EVIDENCE_INSTRUCTION;
use crate::llm_client::{complete_json, LlmError, TextModel};
use crate::models::report::GithubMonitoring;
use crate::models::skills::{SkillDimension, Skills};

pub mod dedup;
pub mod fallback;
pub mod prompts;

pub const MAX_STRENGTHS: usize = 6;
pub const MAX_WEAKNESSES: usize = 6;
pub const MAX_RISKS: usize = 6;
pub const MAX_QUESTIONS: usize = 7;

/// The four lists the AI must return. All fields are required: a reply
/// missing any of them fails to decode and triggers the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub risks: Vec<String>,
    pub questions: Vec<String>,
}

impl Insights {
    /// Unions several insight sets in order and applies the list limits.
    pub fn merge(parts: &[&Insights]) -> Insights {
        Insights {
            strengths: union_of(parts, |i| i.strengths.as_slice(), MAX_STRENGTHS),
            weaknesses: union_of(parts, |i| i.weaknesses.as_slice(), MAX_WEAKNESSES),
            risks: union_of(parts, |i| i.risks.as_slice(), MAX_RISKS),
            questions: union_of(parts, |i| i.questions.as_slice(), MAX_QUESTIONS),
        }
    }
}

fn union_of<'a>(
    parts: &[&'a Insights],
    pick: impl Fn(&'a Insights) -> &'a [String],
    limit: usize,
) -> Vec<String> {
    let lists: Vec<&[String]> = parts.iter().map(|p| pick(*p)).collect();
    dedup::merge_unique(&lists, limit)
}

/// Generates insights for a scored candidate. Up to two model calls.
pub async fn generate_insights(
    model: &dyn TextModel,
    skills: &Skills,
    score: u8,
    github: Option<&GithubMonitoring>,
) -> Insights {
    let base = match request_base(model, skills, score, github).await {
        Ok(insights) => {
            info!("Base insights generated by {}", model.name());
            insights
        }
        Err(e) => {
            warn!("Base insight call failed ({e}); using templated insights");
            fallback::base_insights(skills, score)
        }
    };

    let Some(monitoring) = github else {
        return Insights::merge(&[&base]);
    };

    let automation = match request_github(model, monitoring).await {
        Ok(insights) => {
            info!("GitHub automation insights generated for {}", monitoring.username);
            insights
        }
        Err(e) => {
            warn!("GitHub insight call failed ({e}); using templated GitHub insights");
            fallback::github_insights(monitoring)
        }
    };

    Insights::merge(&[&base, &automation])
}

async fn request_base(
    model: &dyn TextModel,
    skills: &Skills,
    score: u8,
    github: Option<&GithubMonitoring>,
) -> Result<Insights, LlmError> {
    let prompt = build_base_prompt(skills, score, github);
    let insights: Insights = complete_json(model, &prompt, INSIGHT_SYSTEM).await?;
    Ok(insights)
}

async fn request_github(
    model: &dyn TextModel,
    monitoring: &GithubMonitoring,
) -> Result<Insights, LlmError> {
    let metrics_json = serde_json::to_string_pretty(monitoring)?;
    let prompt = GITHUB_INSIGHT_PROMPT_TEMPLATE
        .replace("{username}", &monitoring.username)
        .replace("{metrics_json}", &metrics_json)
        .replace("{evidence_instruction}", EVIDENCE_INSTRUCTION);
    complete_json(model, &prompt, INSIGHT_SYSTEM).await
}

fn build_base_prompt(skills: &Skills, score: u8, github: Option<&GithubMonitoring>) -> String {
    let skills_block = SkillDimension::ALL
        .iter()
        .map(|dim| format!("- {}: {}", dim.label(), skills.get(*dim)))
        .collect::<Vec<_>>()
        .join("\n");

    let github_block = github
        .map(|g| {
            format!(
                "\nGitHub monitoring ({:?} data): {} commits, {} repositories, \
                 consistency {}%, complexity {}%, collaboration {}%\n",
                g.source,
                g.total_commits,
                g.repo_count,
                g.contribution_consistency,
                g.complexity_score,
                g.collaboration_score
            )
        })
        .unwrap_or_default();

    INSIGHT_PROMPT_TEMPLATE
        .replace("{skills_block}", &skills_block)
        .replace("{score}", &score.to_string())
        .replace("{github_block}", &github_block)
        .replace("{evidence_instruction}", EVIDENCE_INSTRUCTION)
}
