//! Skill-overlap scoring and the weighted hybrid combination

use crate::config::ScoringConfig;
use crate::error::{MatcherError, Result};
use crate::scoring::round2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights for the hybrid combination. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub skill: f64,
    pub lexical: f64,
    pub semantic: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            skill: 0.4,
            lexical: 0.3,
            semantic: 0.3,
        }
    }
}

impl Weights {
    pub fn new(skill: f64, lexical: f64, semantic: f64) -> Result<Self> {
        let weights = Self {
            skill,
            lexical,
            semantic,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn from_config(scoring: &ScoringConfig) -> Result<Self> {
        Self::new(
            scoring.skill_weight,
            scoring.lexical_weight,
            scoring.semantic_weight,
        )
    }

    pub fn validate(&self) -> Result<()> {
        let sum = self.skill + self.lexical + self.semantic;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MatcherError::InvalidWeights(format!(
                "weights ({}, {}, {}) sum to {}, expected 1.0",
                self.skill, self.lexical, self.semantic, sum
            )));
        }
        Ok(())
    }

    /// Weighted composite of the three sub-scores, rounded to two decimals.
    pub fn combine(&self, skill_score: f64, lexical_score: f64, semantic_score: f64) -> f64 {
        round2(
            self.skill * skill_score
                + self.lexical * lexical_score
                + self.semantic * semantic_score,
        )
    }
}

/// Skill-overlap score: matched fraction of the JD's skill set, in [0, 100].
/// An empty JD skill set means no skill signal and scores 0, not a perfect
/// or failing match.
pub fn skill_score(resume_skills: &BTreeSet<String>, jd_skills: &BTreeSet<String>) -> f64 {
    if jd_skills.is_empty() {
        return 0.0;
    }
    let matched = resume_skills.intersection(jd_skills).count();
    round2(matched as f64 / jd_skills.len() as f64 * 100.0)
}
