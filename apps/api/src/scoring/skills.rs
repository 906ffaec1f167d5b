//! Skill Scorer: maps indicator hits to the five-dimension skill vector.
//!
//! Per dimension:
//! 1. coverage = distinct indicators present / table size
//! 2. depth    = min(1, total hits / saturation)
//! 3. score    = round(7 × coverage + 3 × depth), clamped to 0..=10
//!
//! Pure and deterministic: no I/O, no randomness.

use crate::models::skills::Skills;
use crate::scoring::tables::{LANGUAGE_REPO_SATURATION, PAGE_HIT_SATURATION};
use crate::signals::{DimensionHits, GithubSignals, PageSignals, SkillHits};

const COVERAGE_WEIGHT: f64 = 7.0;
const DEPTH_WEIGHT: f64 = 3.0;

pub fn dimension_score(hits: DimensionHits, saturation: u32) -> i64 {
    let coverage = if hits.table_size == 0 {
        0.0
    } else {
        (hits.matched as f64 / hits.table_size as f64).min(1.0)
    };
    let depth = if saturation == 0 {
        0.0
    } else {
        (hits.total_hits as f64 / saturation as f64).min(1.0)
    };
    (coverage * COVERAGE_WEIGHT + depth * DEPTH_WEIGHT).round() as i64
}

fn score_hits(hits: &SkillHits, saturation: u32) -> Skills {
    Skills::from_fn(|dim| dimension_score(hits.get(dim), saturation))
}

pub fn score_page(signals: &PageSignals) -> Skills {
    score_hits(&signals.keyword_hits, PAGE_HIT_SATURATION)
}

pub fn score_github(signals: &GithubSignals) -> Skills {
    score_hits(&signals.language_hits, LANGUAGE_REPO_SATURATION)
}
