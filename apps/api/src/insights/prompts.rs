// LLM prompt templates for the Insight Generator.

/// System prompt for both insight calls.
pub const INSIGHT_SYSTEM: &str = "You are an expert technical recruiter AI. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Base insight prompt. Replace `{skills_block}`, `{score}`, `{github_block}`
/// and `{evidence_instruction}` before sending.
pub const INSIGHT_PROMPT_TEMPLATE: &str = r#"Analyze the following candidate profile.

Candidate skill scores (0-10):
{skills_block}

Overall authenticity score: {score}/100
{github_block}
Return this exact JSON structure:
{
  "strengths": ["strength1", "strength2", "strength3"],
  "weaknesses": ["weakness1", "weakness2", "weakness3"],
  "risks": ["risk1", "risk2"],
  "questions": ["question1", "question2", "question3", "question4", "question5"]
}

Make strengths, weaknesses, and risks specific to the skill scores above.
Generate 5 targeted technical interview questions based on their strongest areas.
{evidence_instruction}"#;

/// GitHub automation prompt. Replace `{username}`, `{metrics_json}` and
/// `{evidence_instruction}` before sending.
pub const GITHUB_INSIGHT_PROMPT_TEMPLATE: &str = r#"You are reviewing automated GitHub monitoring data for candidate "{username}".

Monitoring metrics:
{metrics_json}

Assess how genuine and sustained this activity looks: commit cadence, project complexity,
collaboration, and language spread.

Return this exact JSON structure:
{
  "strengths": ["..."],
  "weaknesses": ["..."],
  "risks": ["..."],
  "questions": ["..."]
}

Give 2-3 items per list. Questions should dig into the candidate's GitHub work specifically.
{evidence_instruction}"#;
