//! Indicator tables per skill dimension, and the hit counters that read them.
//!
//! Page text is matched against technical keywords; GitHub profiles are matched
//! against repository languages. Both produce a [`SkillHits`] the scorer reads.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::skills::SkillDimension;
use crate::signals::{DimensionHits, LanguageUsage, SkillHits};

/// Total keyword occurrences at which the page depth term saturates.
pub const PAGE_HIT_SATURATION: u32 = 20;

/// Repositories per dimension at which the language depth term saturates.
pub const LANGUAGE_REPO_SATURATION: u32 = 10;

pub fn page_keywords(dim: SkillDimension) -> &'static [&'static str] {
    match dim {
        SkillDimension::Frontend => &[
            "react",
            "vue",
            "angular",
            "html",
            "css",
            "javascript",
            "typescript",
            "tailwind",
            "responsive",
            "ui",
        ],
        SkillDimension::Backend => &[
            "node",
            "express",
            "api",
            "rest",
            "graphql",
            "database",
            "postgres",
            "mongodb",
            "python",
            "java",
            "redis",
            "microservice",
        ],
        SkillDimension::Dsa => &[
            "algorithm",
            "data structure",
            "complexity",
            "binary tree",
            "graph",
            "dynamic programming",
            "leetcode",
            "optimization",
        ],
        SkillDimension::System => &[
            "scalable",
            "distributed",
            "architecture",
            "system design",
            "queue",
            "cache",
            "load balancer",
            "kubernetes",
            "docker",
            "observability",
        ],
        SkillDimension::Testing => &[
            "test",
            "unit test",
            "integration test",
            "e2e",
            "jest",
            "vitest",
            "cypress",
            "playwright",
            "qa",
            "tdd",
        ],
    }
}

pub fn language_indicators(dim: SkillDimension) -> &'static [&'static str] {
    match dim {
        SkillDimension::Frontend => &[
            "JavaScript",
            "TypeScript",
            "HTML",
            "CSS",
            "Vue",
            "Svelte",
            "Dart",
        ],
        SkillDimension::Backend => &[
            "Python", "Java", "Go", "Ruby", "PHP", "C#", "Rust", "Kotlin", "Elixir",
        ],
        SkillDimension::Dsa => &["C", "C++", "Java", "Python"],
        SkillDimension::System => &["Go", "Rust", "C", "C++", "Shell", "Dockerfile"],
        SkillDimension::Testing => &["TypeScript", "JavaScript", "Python", "Java"],
    }
}

/// Whole-word matchers for every page keyword, compiled once, in table order.
static PAGE_PATTERNS: LazyLock<Vec<Vec<Regex>>> = LazyLock::new(|| {
    SkillDimension::ALL
        .iter()
        .map(|dim| {
            page_keywords(*dim)
                .iter()
                .filter_map(|kw| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(kw))).ok())
                .collect()
        })
        .collect()
});

/// Counts whole-word keyword occurrences per dimension.
pub fn page_keyword_hits(text: &str) -> SkillHits {
    SkillHits::from_fn(|dim| {
        let patterns = &PAGE_PATTERNS[dim.index()];
        let mut hits = DimensionHits {
            table_size: page_keywords(dim).len() as u32,
            ..DimensionHits::default()
        };
        for pattern in patterns {
            let count = pattern.find_iter(text).count() as u32;
            if count > 0 {
                hits.matched += 1;
                hits.total_hits += count;
            }
        }
        hits
    })
}

/// Intersects a profile's languages with each dimension's indicator list.
/// A language's hit weight is the number of repositories written in it.
pub fn language_hits(languages: &[LanguageUsage]) -> SkillHits {
    SkillHits::from_fn(|dim| {
        let indicators = language_indicators(dim);
        let mut hits = DimensionHits {
            table_size: indicators.len() as u32,
            ..DimensionHits::default()
        };
        for indicator in indicators {
            if let Some(usage) = languages
                .iter()
                .find(|l| l.name.eq_ignore_ascii_case(indicator))
            {
                hits.matched += 1;
                hits.total_hits += usage.repos;
            }
        }
        hits
    })
}
