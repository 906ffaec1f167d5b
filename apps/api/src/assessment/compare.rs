//! Two-candidate hiring recommendation.
//!
//! The model is asked first; a missing or malformed reply is replaced by a
//! score-gap heuristic. The response says which of the two produced it.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assessment::prompts::COMPARE_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{EVIDENCE_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::{complete_json, LlmError, TextModel};

/// Score gap at or below which neither candidate is a clear pick.
const CLOSE_GAP: i64 = 10;

/// The parts of a candidate report the comparison looks at. Extra fields in
/// the request (a full report, say) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateSummary {
    pub name: String,
    /// Any JSON number; compared after rounding.
    pub score: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub risks: Vec<String>,
}

impl CandidateSummary {
    fn points(&self) -> i64 {
        self.score.round() as i64
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub candidate_a: CandidateSummary,
    pub candidate_b: CandidateSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSource {
    Ai,
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AiRecommendation {
    recommendation: String,
    summary: String,
    interview_focus: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommendation: String,
    pub summary: String,
    pub interview_focus: Vec<String>,
    pub source: RecommendationSource,
}

impl Recommendation {
    fn from_ai(reply: AiRecommendation) -> Self {
        Self {
            recommendation: reply.recommendation,
            summary: reply.summary,
            interview_focus: reply.interview_focus,
            source: RecommendationSource::Ai,
        }
    }
}

/// First item lower-cased, or `default`.
fn first_or(items: &[String], default: &str) -> String {
    items
        .first()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Deterministic recommendation from scores and the first list items.
/// Ties go to candidate A.
pub fn heuristic_recommendation(a: &CandidateSummary, b: &CandidateSummary) -> Recommendation {
    if (a.points() - b.points()).abs() <= CLOSE_GAP {
        return Recommendation {
            recommendation: "Interview Both Candidates".to_string(),
            summary: format!(
                "{} (score {}) and {} (score {}) are very close in overall capability. \
                 Both show strong potential: {} vs {}. A structured interview round is \
                 recommended to differentiate based on culture fit, communication, and \
                 problem-solving approach.",
                a.name,
                a.points(),
                b.name,
                b.points(),
                first_or(&a.strengths, "solid fundamentals"),
                first_or(&b.strengths, "solid fundamentals"),
            ),
            interview_focus: vec![
                "Compare problem-solving approaches with a live coding session".to_string(),
                format!(
                    "Assess {}'s {} through targeted questions",
                    a.name,
                    first_or(&a.weaknesses, "areas for growth")
                ),
                format!(
                    "Evaluate {}'s {} with practical scenarios",
                    b.name,
                    first_or(&b.weaknesses, "areas for growth")
                ),
                "Test culture fit and team collaboration skills".to_string(),
                "Discuss long-term career goals and role alignment".to_string(),
            ],
            source: RecommendationSource::Heuristic,
        };
    }

    let (winner, loser) = if a.points() >= b.points() { (a, b) } else { (b, a) };
    let key_strengths = winner
        .strengths
        .iter()
        .take(2)
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" and ");
    let key_strengths = if key_strengths.is_empty() {
        "strong technical skills".to_string()
    } else {
        key_strengths
    };

    Recommendation {
        recommendation: format!("Hire {}", winner.name),
        summary: format!(
            "{} scores significantly higher ({} vs {}) and demonstrates stronger overall \
             capability. Key strengths include {}. While {} shows potential in areas like {}, \
             the gap in authenticity score and skill depth makes {} the stronger choice for \
             this role.",
            winner.name,
            winner.points(),
            loser.points(),
            key_strengths,
            loser.name,
            first_or(&loser.strengths, "certain areas"),
            winner.name,
        ),
        interview_focus: vec![
            format!(
                "Verify {}'s {} with targeted technical questions",
                winner.name,
                first_or(&winner.weaknesses, "potential gaps")
            ),
            format!(
                "Deep-dive into {}'s strongest projects to confirm hands-on experience",
                winner.name
            ),
            "Ask behavioral questions about teamwork and ownership".to_string(),
            format!(
                "Examine risk area: {}",
                first_or(&winner.risks, "consistency of contributions")
            ),
            "Discuss expected growth trajectory and learning mindset".to_string(),
        ],
        source: RecommendationSource::Heuristic,
    }
}

async fn request_recommendation(
    model: &dyn TextModel,
    req: &CompareRequest,
) -> Result<AiRecommendation, LlmError> {
    let prompt = COMPARE_PROMPT_TEMPLATE
        .replace("{candidate_a_json}", &serde_json::to_string_pretty(&req.candidate_a)?)
        .replace("{candidate_b_json}", &serde_json::to_string_pretty(&req.candidate_b)?)
        .replace("{evidence_instruction}", EVIDENCE_INSTRUCTION);
    complete_json(model, &prompt, JSON_ONLY_SYSTEM).await
}

pub async fn compare_candidates(model: &dyn TextModel, req: &CompareRequest) -> Recommendation {
    info!(
        "Comparing {} ({}) with {} ({})",
        req.candidate_a.name, req.candidate_a.score, req.candidate_b.name, req.candidate_b.score
    );

    match request_recommendation(model, req).await {
        Ok(reply)
            if !reply.recommendation.trim().is_empty()
                && !reply.summary.trim().is_empty()
                && !reply.interview_focus.is_empty() =>
        {
            info!("Recommendation generated by {}", model.name());
            Recommendation::from_ai(reply)
        }
        Ok(_) => {
            warn!("Comparison reply was incomplete; using score heuristic");
            heuristic_recommendation(&req.candidate_a, &req.candidate_b)
        }
        Err(e) => {
            warn!("Comparison call failed ({e}); using score heuristic");
            heuristic_recommendation(&req.candidate_a, &req.candidate_b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::CannedModel;
    use crate::llm_client::DisabledModel;

    fn candidate(name: &str, score: f64) -> CandidateSummary {
        CandidateSummary {
            name: name.to_string(),
            score,
            strengths: vec!["Strong React skills".to_string(), "Clean APIs".to_string()],
            weaknesses: vec!["Limited testing".to_string()],
            risks: vec!["Low development activity".to_string()],
        }
    }

    #[test]
    fn test_close_scores_interview_both() {
        let rec = heuristic_recommendation(&candidate("Ada", 70.0), &candidate("Grace", 80.0));
        assert_eq!(rec.recommendation, "Interview Both Candidates");
        assert_eq!(rec.interview_focus.len(), 5);
        assert!(rec.summary.contains("strong react skills"));
    }

    #[test]
    fn test_clear_gap_hires_higher_score() {
        let rec = heuristic_recommendation(&candidate("Ada", 55.0), &candidate("Grace", 82.0));
        assert_eq!(rec.recommendation, "Hire Grace");
        assert!(rec.summary.contains("(82 vs 55)"));
        assert!(rec.summary.contains("strong react skills and clean apis"));
        assert_eq!(rec.interview_focus[3], "Examine risk area: low development activity");
        assert_eq!(rec.source, RecommendationSource::Heuristic);
    }

    #[test]
    fn test_empty_lists_use_defaults() {
        let a = CandidateSummary {
            name: "A".to_string(),
            score: 90.0,
            ..Default::default()
        };
        let b = CandidateSummary {
            name: "B".to_string(),
            score: 10.0,
            ..Default::default()
        };
        let rec = heuristic_recommendation(&a, &b);
        assert!(rec.summary.contains("strong technical skills"));
        assert!(rec.interview_focus[0].contains("potential gaps"));
    }

    #[tokio::test]
    async fn test_disabled_model_uses_heuristic() {
        let req = CompareRequest {
            candidate_a: candidate("Ada", 90.0),
            candidate_b: candidate("Grace", 40.0),
        };
        let rec = compare_candidates(&DisabledModel, &req).await;
        assert_eq!(rec.recommendation, "Hire Ada");
        assert_eq!(rec.source, RecommendationSource::Heuristic);
    }

    #[tokio::test]
    async fn test_ai_reply_is_used() {
        let model = CannedModel::replying(
            r#"{"recommendation": "Hire Grace", "summary": "Grace is stronger.",
                "interviewFocus": ["System design depth"]}"#,
        );
        let req = CompareRequest {
            candidate_a: candidate("Ada", 60.0),
            candidate_b: candidate("Grace", 65.0),
        };
        let rec = compare_candidates(&model, &req).await;
        assert_eq!(rec.recommendation, "Hire Grace");
        assert_eq!(rec.source, RecommendationSource::Ai);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["source"], "ai");
        assert!(json.get("interviewFocus").is_some());
    }

    #[test]
    fn test_request_ignores_extra_report_fields() {
        let req: CompareRequest = serde_json::from_str(
            r#"{"candidateA": {"name": "Ada", "score": 70, "id": "x", "skills": {}},
                "candidateB": {"name": "Grace"}}"#,
        )
        .unwrap();
        assert_eq!(req.candidate_a.score, 70.0);
        assert_eq!(req.candidate_b.score, 0.0);
    }

    #[test]
    fn test_fractional_and_negative_scores_are_accepted() {
        let req: CompareRequest = serde_json::from_str(
            r#"{"candidateA": {"name": "Ada", "score": 81.6},
                "candidateB": {"name": "Grace", "score": -3}}"#,
        )
        .unwrap();
        let rec = heuristic_recommendation(&req.candidate_a, &req.candidate_b);
        assert_eq!(rec.recommendation, "Hire Ada");
        assert!(rec.summary.contains("(82 vs -3)"));
    }

    #[test]
    fn test_gap_is_measured_on_rounded_scores() {
        // 70.4 and 80.4 round to 70 and 80: a gap of exactly 10
        let rec = heuristic_recommendation(&candidate("Ada", 70.4), &candidate("Grace", 80.4));
        assert_eq!(rec.recommendation, "Interview Both Candidates");
    }
}
