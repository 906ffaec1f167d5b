use serde::{Deserialize, Serialize};

/// One axis of the skill vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillDimension {
    Frontend,
    Backend,
    Dsa,
    System,
    Testing,
}

impl SkillDimension {
    pub const ALL: [SkillDimension; 5] = [
        SkillDimension::Frontend,
        SkillDimension::Backend,
        SkillDimension::Dsa,
        SkillDimension::System,
        SkillDimension::Testing,
    ];

    pub fn index(self) -> usize {
        match self {
            SkillDimension::Frontend => 0,
            SkillDimension::Backend => 1,
            SkillDimension::Dsa => 2,
            SkillDimension::System => 3,
            SkillDimension::Testing => 4,
        }
    }

    /// Human label used in prompts and templated insight text.
    pub fn label(self) -> &'static str {
        match self {
            SkillDimension::Frontend => "Frontend",
            SkillDimension::Backend => "Backend",
            SkillDimension::Dsa => "DSA",
            SkillDimension::System => "System Design",
            SkillDimension::Testing => "Testing",
        }
    }
}

/// The five-dimension skill profile. Every value lives in `0..=10`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub frontend: u8,
    pub backend: u8,
    pub dsa: u8,
    pub system: u8,
    pub testing: u8,
}

impl Skills {
    pub const MAX: u8 = 10;

    /// Builds a vector from per-dimension raw values, clamping each into range.
    pub fn from_fn(mut f: impl FnMut(SkillDimension) -> i64) -> Self {
        let mut skills = Skills::default();
        for dim in SkillDimension::ALL {
            skills.set(dim, f(dim));
        }
        skills
    }

    pub fn get(&self, dim: SkillDimension) -> u8 {
        match dim {
            SkillDimension::Frontend => self.frontend,
            SkillDimension::Backend => self.backend,
            SkillDimension::Dsa => self.dsa,
            SkillDimension::System => self.system,
            SkillDimension::Testing => self.testing,
        }
    }

    fn set(&mut self, dim: SkillDimension, value: i64) {
        let value = value.clamp(0, Self::MAX as i64) as u8;
        match dim {
            SkillDimension::Frontend => self.frontend = value,
            SkillDimension::Backend => self.backend = value,
            SkillDimension::Dsa => self.dsa = value,
            SkillDimension::System => self.system = value,
            SkillDimension::Testing => self.testing = value,
        }
    }

    pub fn average(&self) -> f64 {
        let total: u32 = SkillDimension::ALL.iter().map(|d| self.get(*d) as u32).sum();
        total as f64 / SkillDimension::ALL.len() as f64
    }

    /// Per-dimension rounded average of two vectors.
    pub fn merge(&self, other: &Skills) -> Skills {
        Skills::from_fn(|dim| {
            ((self.get(dim) as f64 + other.get(dim) as f64) / 2.0).round() as i64
        })
    }

    /// Dimensions ordered strongest first. Ties keep the fixed dimension order.
    pub fn ranked(&self) -> Vec<SkillDimension> {
        let mut dims = SkillDimension::ALL.to_vec();
        dims.sort_by(|a, b| self.get(*b).cmp(&self.get(*a)));
        dims
    }
}
