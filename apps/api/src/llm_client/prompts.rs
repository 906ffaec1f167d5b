// Shared prompt fragments. Each feature module keeps its own prompts.rs
// alongside it; only cross-cutting pieces live here.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps generated text tied to the numbers we actually computed.
pub const EVIDENCE_INSTRUCTION: &str = "\
    Base every statement on the scores and metrics provided. \
    Do NOT invent projects, employers, or technologies that are not implied by the data. \
    Keep each list item to a single sentence.";
