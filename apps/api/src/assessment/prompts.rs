// Assessment prompt templates. All calls use llm_client::prompts::JSON_ONLY_SYSTEM.

pub const HIRING_TEST_PROMPT_TEMPLATE: &str = r#"You are a senior engineering hiring manager.

Generate a hiring test for this candidate.

Candidate data:
{candidate_json}

Include:
1. 2 coding round tasks (practical implementation challenges)
2. 5 MCQs with 4 options each and the correct answer
3. 1 project assignment task

Tailor the test to the candidate's skills and level.

Return ONLY valid JSON in this exact format:
{
  "codingRound": ["task1", "task2"],
  "mcqs": [
    { "question": "...", "options": ["A", "B", "C", "D"], "answer": "B" }
  ],
  "projectTask": "Build a mini project..."
}"#;

pub const COMPARE_PROMPT_TEMPLATE: &str = r#"You are a hiring committee chair comparing two engineering candidates.

Candidate A:
{candidate_a_json}

Candidate B:
{candidate_b_json}

{evidence_instruction}

Decide who to hire, or whether both should be interviewed. Give 5 interview focus areas.

Return ONLY valid JSON in this exact format:
{
  "recommendation": "Hire <name>" or "Interview Both Candidates",
  "summary": "2-4 sentences",
  "interviewFocus": ["focus1", "focus2", "focus3", "focus4", "focus5"]
}"#;
