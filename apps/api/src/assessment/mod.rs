// Assessment: hiring-test generation and two-candidate comparison.
// Both are AI-first and always answer; a failed model call falls back to
// deterministic content.

pub mod compare;
pub mod handlers;
pub mod hiring_test;
pub mod prompts;
