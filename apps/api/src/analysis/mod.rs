// Candidate analysis: the /analyze pipeline and the report read endpoints.
// Scoring lives in crate::scoring, AI text in crate::insights; this module
// only sequences them and hands the result to the store.

pub mod handlers;
pub mod pipeline;
