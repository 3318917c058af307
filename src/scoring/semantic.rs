//! Semantic similarity with an explicit fallback strategy

use crate::config::Config;
use crate::scoring::{cosine_similarity, round2, SubScore};
use log::{info, warn};
use model2vec_rs::model::StaticModel;
use std::collections::HashSet;
use std::path::Path;

/// Strategy behind the semantic score, fixed at construction time.
enum SemanticBackend {
    /// Dense sentence embeddings via a Model2Vec static model.
    Embedding(StaticModel),
    /// Word-set Jaccard overlap, used when no embedding model is available.
    /// Scores from this path are tagged as approximations.
    WordOverlap,
}

pub struct SemanticScorer {
    backend: SemanticBackend,
}

impl SemanticScorer {
    /// Build the scorer around a loaded embedding model.
    pub fn embedding(model: StaticModel) -> Self {
        Self {
            backend: SemanticBackend::Embedding(model),
        }
    }

    /// Build the scorer around the word-overlap fallback.
    pub fn word_overlap() -> Self {
        Self {
            backend: SemanticBackend::WordOverlap,
        }
    }

    /// Load the configured embedding model, falling back to word overlap
    /// when the model is missing or fails to load. Construct once per
    /// process and share by reference.
    pub fn from_config(config: &Config) -> Self {
        let model_path = config.embedding_model_path();
        if !model_path.exists() {
            warn!(
                "Embedding model not found at {}; using word-overlap fallback",
                model_path.display()
            );
            return Self::word_overlap();
        }
        Self::from_model_path(&model_path)
    }

    fn from_model_path(model_path: &Path) -> Self {
        match StaticModel::from_pretrained(model_path, None, None, None) {
            Ok(model) => {
                info!("Loaded embedding model from {}", model_path.display());
                Self::embedding(model)
            }
            Err(e) => {
                warn!(
                    "Failed to load embedding model from {}: {}; using word-overlap fallback",
                    model_path.display(),
                    e
                );
                Self::word_overlap()
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.backend, SemanticBackend::WordOverlap)
    }

    /// Score two texts in [0, 100]. Internal faults never propagate: they
    /// degrade to a zero score tagged as failed.
    pub fn score(&self, text_a: &str, text_b: &str) -> SubScore {
        if text_a.trim().is_empty() || text_b.trim().is_empty() {
            return match self.backend {
                SemanticBackend::Embedding(_) => SubScore::exact(0.0),
                SemanticBackend::WordOverlap => SubScore::fallback(0.0),
            };
        }

        match &self.backend {
            SemanticBackend::Embedding(model) => {
                let emb_a = model.encode_single(text_a);
                let emb_b = model.encode_single(text_b);
                match cosine_similarity(&emb_a, &emb_b) {
                    Ok(cosine) => SubScore::exact(round2(cosine * 100.0)),
                    Err(e) => {
                        warn!("Semantic scorer degraded to 0.0: {}", e);
                        SubScore::failed()
                    }
                }
            }
            SemanticBackend::WordOverlap => {
                SubScore::fallback(round2(jaccard_similarity(text_a, text_b) * 100.0))
            }
        }
    }
}

/// Jaccard similarity of the lower-cased whitespace-tokenized word sets.
fn jaccard_similarity(text_a: &str, text_b: &str) -> f64 {
    let set_a: HashSet<String> = text_a.split_whitespace().map(str::to_lowercase).collect();
    let set_b: HashSet<String> = text_b.split_whitespace().map(str::to_lowercase).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreSource;

    fn fallback() -> SemanticScorer {
        SemanticScorer::word_overlap()
    }

    #[test]
    fn test_fallback_self_similarity_is_maximal() {
        let text = "distributed systems engineer with golang experience";
        let score = fallback().score(text, text);
        assert_eq!(score.value, 100.0);
        assert_eq!(score.source, ScoreSource::Fallback);
    }

    #[test]
    fn test_fallback_is_symmetric() {
        let a = "python backend services";
        let b = "backend python apis";
        assert_eq!(fallback().score(a, b).value, fallback().score(b, a).value);
    }

    #[test]
    fn test_fallback_is_labelled_approximate() {
        let score = fallback().score("rust services", "rust tooling");
        assert_eq!(score.source, ScoreSource::Fallback);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(fallback().score("", "job description").value, 0.0);
        assert_eq!(fallback().score("resume text", "  \n ").value, 0.0);
    }

    #[test]
    fn test_missing_model_selects_fallback() {
        let mut config = Config::default();
        config.models.models_dir = std::path::PathBuf::from("/nonexistent/models");
        let scorer = SemanticScorer::from_config(&config);
        assert!(scorer.is_fallback());
    }

    #[test]
    fn test_jaccard_disjoint_is_zero() {
        assert_eq!(jaccard_similarity("alpha beta", "gamma delta"), 0.0);
    }

    #[test]
    fn test_jaccard_case_insensitive() {
        assert_eq!(jaccard_similarity("Python SQL", "python sql"), 1.0);
    }
}
