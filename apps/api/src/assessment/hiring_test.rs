//! Hiring test generation. AI-tailored when possible, otherwise a fixed
//! general-purpose test. Never fails.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assessment::prompts::HIRING_TEST_PROMPT_TEMPLATE;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{complete_json, LlmError, TextModel};

const MCQ_OPTIONS: usize = 4;

/// Candidate summary the test is tailored to. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HiringTestRequest {
    pub name: Option<String>,
    /// A skill list or a skills object; passed to the model verbatim.
    pub skills: Option<serde_json::Value>,
    /// Number or label; passed to the model verbatim.
    pub score: Option<serde_json::Value>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mcq {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringTest {
    pub coding_round: Vec<String>,
    pub mcqs: Vec<Mcq>,
    pub project_task: String,
}

impl HiringTest {
    /// A usable test has tasks, well-formed MCQs, and a project.
    fn is_complete(&self) -> bool {
        !self.coding_round.is_empty()
            && self.coding_round.iter().all(|t| !t.trim().is_empty())
            && !self.mcqs.is_empty()
            && self.mcqs.iter().all(|m| {
                !m.question.trim().is_empty()
                    && m.options.len() == MCQ_OPTIONS
                    && !m.answer.trim().is_empty()
            })
            && !self.project_task.trim().is_empty()
    }
}

fn mcq(question: &str, options: [&str; MCQ_OPTIONS], answer: &str) -> Mcq {
    Mcq {
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        answer: answer.to_string(),
    }
}

/// The test served whenever the model is unavailable or replies badly.
pub fn fallback_test() -> HiringTest {
    HiringTest {
        coding_round: vec![
            "Build a REST API with CRUD operations for a task management system using Node.js and Express.".to_string(),
            "Implement a function that finds the longest substring without repeating characters. Optimize for O(n) time.".to_string(),
        ],
        mcqs: vec![
            mcq(
                "What is the time complexity of binary search?",
                ["O(n)", "O(log n)", "O(n log n)", "O(1)"],
                "O(log n)",
            ),
            mcq(
                "Which HTTP method is idempotent?",
                ["POST", "PATCH", "PUT", "None of the above"],
                "PUT",
            ),
            mcq(
                "What does ACID stand for in databases?",
                [
                    "Atomicity, Consistency, Isolation, Durability",
                    "Association, Consistency, Isolation, Durability",
                    "Atomicity, Concurrency, Isolation, Durability",
                    "Atomicity, Consistency, Integration, Durability",
                ],
                "Atomicity, Consistency, Isolation, Durability",
            ),
            mcq(
                "What is the purpose of an index in a database?",
                [
                    "To enforce constraints",
                    "To speed up query performance",
                    "To normalize data",
                    "To create backups",
                ],
                "To speed up query performance",
            ),
            mcq(
                "Which data structure uses LIFO ordering?",
                ["Queue", "Stack", "Linked List", "Tree"],
                "Stack",
            ),
        ],
        project_task: "Build a mini full-stack project: a URL shortener with analytics. \
            Include a REST API backend, a simple frontend to shorten URLs, and a dashboard \
            showing click counts and referrer data."
            .to_string(),
    }
}

async fn request_test(model: &dyn TextModel, req: &HiringTestRequest) -> Result<HiringTest, LlmError> {
    let candidate_json = serde_json::to_string_pretty(req)?;
    let prompt = HIRING_TEST_PROMPT_TEMPLATE.replace("{candidate_json}", &candidate_json);
    complete_json(model, &prompt, JSON_ONLY_SYSTEM).await
}

pub async fn generate_hiring_test(model: &dyn TextModel, req: &HiringTestRequest) -> HiringTest {
    info!(
        "Generating hiring test for {} (score: {:?})",
        req.name.as_deref().unwrap_or("unnamed candidate"),
        req.score
    );

    match request_test(model, req).await {
        Ok(test) if test.is_complete() => {
            info!("Hiring test generated by {}", model.name());
            test
        }
        Ok(_) => {
            warn!("Hiring test reply was incomplete; using fallback test");
            fallback_test()
        }
        Err(e) => {
            warn!("Hiring test call failed ({e}); using fallback test");
            fallback_test()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::CannedModel;
    use crate::llm_client::DisabledModel;

    #[test]
    fn test_fallback_shape() {
        let test = fallback_test();
        assert_eq!(test.coding_round.len(), 2);
        assert_eq!(test.mcqs.len(), 5);
        assert!(test.is_complete());
        for m in &test.mcqs {
            assert!(m.options.contains(&m.answer));
        }
    }

    #[test]
    fn test_fallback_serializes_camel_case() {
        let json = serde_json::to_value(fallback_test()).unwrap();
        assert!(json.get("codingRound").is_some());
        assert!(json.get("projectTask").is_some());
    }

    #[tokio::test]
    async fn test_disabled_model_returns_fallback() {
        let test = generate_hiring_test(&DisabledModel, &HiringTestRequest::default()).await;
        assert_eq!(test, fallback_test());
    }

    #[tokio::test]
    async fn test_valid_reply_is_used() {
        let model = CannedModel::replying(
            r#"```json
            {"codingRound": ["Write a rate limiter"],
             "mcqs": [{"question": "Q?", "options": ["a", "b", "c", "d"], "answer": "b"}],
             "projectTask": "Ship a CLI"}
            ```"#,
        );
        let test = generate_hiring_test(&model, &HiringTestRequest::default()).await;
        assert_eq!(test.coding_round, vec!["Write a rate limiter"]);
        assert_eq!(test.project_task, "Ship a CLI");
    }

    #[tokio::test]
    async fn test_incomplete_reply_falls_back() {
        let model = CannedModel::replying(
            r#"{"codingRound": [], "mcqs": [], "projectTask": "x"}"#,
        );
        let test = generate_hiring_test(&model, &HiringTestRequest::default()).await;
        assert_eq!(test, fallback_test());
    }

    #[tokio::test]
    async fn test_mcq_with_three_options_falls_back() {
        let model = CannedModel::replying(
            r#"{"codingRound": ["t"],
                "mcqs": [{"question": "Q?", "options": ["a", "b", "c"], "answer": "a"}],
                "projectTask": "p"}"#,
        );
        let test = generate_hiring_test(&model, &HiringTestRequest::default()).await;
        assert_eq!(test, fallback_test());
    }

    #[test]
    fn test_request_accepts_skill_object_or_list() {
        let list: HiringTestRequest =
            serde_json::from_str(r#"{"name": "Ada", "skills": ["rust"], "score": 72}"#).unwrap();
        assert_eq!(list.score, Some(serde_json::json!(72)));
        let object: HiringTestRequest =
            serde_json::from_str(r#"{"skills": {"frontend": 7}}"#).unwrap();
        assert!(object.skills.is_some());
        assert!(object.strengths.is_empty());
        let labelled: HiringTestRequest = serde_json::from_str(r#"{"score": "high"}"#).unwrap();
        assert_eq!(labelled.score, Some(serde_json::json!("high")));
    }
}
