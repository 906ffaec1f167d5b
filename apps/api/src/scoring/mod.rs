//! Deterministic scoring: skill vectors, authenticity, risk flags and
//! resume comparison. Nothing in here performs I/O.

pub mod authenticity;
pub mod resume;
pub mod risks;
pub mod skills;
pub mod tables;
