//! Similarity scoring: lexical, semantic, and the weighted hybrid

pub mod hybrid;
pub mod lexical;
pub mod semantic;

pub use hybrid::Weights;
pub use semantic::SemanticScorer;

use serde::{Deserialize, Serialize};

/// How a sub-score was produced. Callers can tell a genuinely low score
/// from one that was degraded to zero by a scorer fault, and a true
/// semantic score from the word-overlap approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    Exact,
    Fallback,
    Failed,
}

/// A similarity sub-score in [0, 100] tagged with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    pub value: f64,
    pub source: ScoreSource,
}

impl SubScore {
    pub fn exact(value: f64) -> Self {
        Self {
            value,
            source: ScoreSource::Exact,
        }
    }

    pub fn fallback(value: f64) -> Self {
        Self {
            value,
            source: ScoreSource::Fallback,
        }
    }

    pub fn failed() -> Self {
        Self {
            value: 0.0,
            source: ScoreSource::Failed,
        }
    }
}

/// Round to two decimals, the precision every reported score carries.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Cosine similarity between two dense vectors.
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> crate::error::Result<f64> {
    use crate::error::MatcherError;

    if a.len() != b.len() {
        return Err(MatcherError::Scorer(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += f64::from(*x) * f64::from(*y);
        norm_a += f64::from(*x) * f64::from(*x);
        norm_b += f64::from(*y) * f64::from(*y);
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}
