//! Deterministic insight templates used whenever the AI call cannot be used.

use crate::insights::Insights;
use crate::models::report::GithubMonitoring;
use crate::models::skills::{SkillDimension, Skills};

const GENERIC_QUESTION: &str =
    "Walk through a recent technical decision and the alternatives you evaluated.";

fn question_bank(dim: SkillDimension) -> [&'static str; 2] {
    match dim {
        SkillDimension::Frontend => [
            "How do you structure a large frontend codebase to stay maintainable?",
            "What tradeoffs do you consider when optimizing rendering performance?",
        ],
        SkillDimension::Backend => [
            "How would you design an API that remains backward compatible over time?",
            "How do you handle retries, timeouts, and idempotency in external API calls?",
        ],
        SkillDimension::Dsa => [
            "Which data structure would you choose for fast lookups with frequent updates, and why?",
            "How do you reason about time and space complexity before coding?",
        ],
        SkillDimension::System => [
            "How would you scale this system from 1k to 1M daily users?",
            "What monitoring and alerting would you put in place for this architecture?",
        ],
        SkillDimension::Testing => [
            "How do you decide the right mix of unit, integration, and end-to-end tests?",
            "How would you prevent flaky tests in a CI pipeline?",
        ],
    }
}

/// Five questions drawn from the two strongest dimensions.
pub fn interview_questions(skills: &Skills) -> Vec<String> {
    let mut questions: Vec<String> = skills
        .ranked()
        .into_iter()
        .take(2)
        .flat_map(question_bank)
        .map(str::to_string)
        .collect();
    while questions.len() < 5 {
        questions.push(GENERIC_QUESTION.to_string());
    }
    questions.truncate(5);
    questions
}

/// 3 strengths, 3 weaknesses, 2 risks, 5 questions.
pub fn base_insights(skills: &Skills, score: u8) -> Insights {
    let ranked = skills.ranked();
    let (top, second) = (ranked[0].label(), ranked[1].label());
    let (weakest, next_weakest) = (ranked[4].label(), ranked[3].label());

    Insights {
        strengths: vec![
            format!("{top} signal is strong based on detected technical evidence."),
            format!("{second} appears consistently across the analyzed profile."),
            if score > 75 {
                "Overall evidence points to genuine, hands-on project work.".to_string()
            } else {
                "Profile shows a credible technical foundation worth verifying in interview."
                    .to_string()
            },
        ],
        weaknesses: vec![
            format!("{next_weakest} evidence is limited in the analyzed content."),
            format!("{weakest} indicators are weaker than other technical areas."),
            "Adding explicit project outcomes and metrics would improve confidence.".to_string(),
        ],
        risks: vec![
            "Skill depth hard to verify from public evidence alone.".to_string(),
            "May rely on tutorials without original work.".to_string(),
        ],
        questions: interview_questions(skills),
    }
}

/// Template for the GitHub automation insight call.
pub fn github_insights(monitoring: &GithubMonitoring) -> Insights {
    let mut strengths = vec![format!(
        "{} commits across {} repositories.",
        monitoring.total_commits, monitoring.repo_count
    )];
    if monitoring.contribution_consistency >= 60 {
        strengths.push(format!(
            "Steady contribution cadence ({}% consistency).",
            monitoring.contribution_consistency
        ));
    }

    let mut weaknesses = Vec::new();
    if monitoring.collaboration_score < 50 {
        weaknesses.push("Limited collaboration signals such as pull requests and forks.".to_string());
    }
    if monitoring.complexity_score < 50 {
        weaknesses.push("Repositories are mostly small in scope.".to_string());
    }

    let mut questions = vec![format!(
        "Which of your {} repositories best represents your own design decisions, and why?",
        monitoring.repo_count
    )];
    if !monitoring.languages.is_empty() {
        questions.push(format!(
            "How did you choose between {} across your projects?",
            monitoring.languages.join(", ")
        ));
    }

    Insights {
        strengths,
        weaknesses,
        risks: monitoring.risks.clone(),
        questions,
    }
}
