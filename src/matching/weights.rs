// src/matching/weights.rs

use anyhow::Result;
use serde::Deserialize;

/// Scoring policy: how many of the 100 points each JD category is worth.
/// Kept separate from the set-matching mechanics so the policy stays
/// auditable and can be overridden from a config file.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    pub required: f64,
    pub preferred: f64,
    pub keywords: f64,
    pub red_flags: f64,
}

pub const DEFAULT_WEIGHTS: MatchWeights = MatchWeights {
    required: 60.0,
    preferred: 15.0,
    keywords: 15.0,
    red_flags: 10.0,
};

impl Default for MatchWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.required + self.preferred + self.keywords + self.red_flags
    }

    /// Reject policies the 0-100 score scale cannot represent.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("required", self.required),
            ("preferred", self.preferred),
            ("keywords", self.keywords),
            ("red_flags", self.red_flags),
        ] {
            if value < 0.0 {
                anyhow::bail!("Weight '{}' must not be negative (got {})", name, value);
            }
        }
        if self.sum() > 100.0 {
            anyhow::bail!("Weights must sum to at most 100 (got {})", self.sum());
        }
        Ok(())
    }
}
