//! Single-candidate analysis: one resume against one job description

use crate::config::Config;
use crate::error::Result;
use crate::extract::{ExtractedFields, FieldExtractor, SkillVocabulary};
use crate::input::DocumentFetcher;
use crate::scoring::hybrid::{skill_score, Weights};
use crate::scoring::lexical::lexical_similarity;
use crate::scoring::{ScoreSource, SemanticScorer};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// The analysis record produced per comparison. Skill lists are sorted so
/// output is deterministic; scores are rounded to two decimals. Not mutated
/// after construction except to attach feedback text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub resume_skills: Vec<String>,
    pub jd_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub resume_fields: ExtractedFields,
    pub jd_fields: ExtractedFields,
    pub skill_score: f64,
    pub lexical_score: f64,
    pub semantic_score: f64,
    pub hybrid_score: f64,
    pub lexical_source: ScoreSource,
    pub semantic_source: ScoreSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_feedback: Option<String>,
}

impl AnalysisResult {
    pub fn attach_feedback(&mut self, feedback: String) {
        self.ai_feedback = Some(feedback);
    }
}

/// Seam between the ranking aggregator and whatever produces an analysis,
/// so batch ranking can be exercised without network or models.
#[async_trait]
pub trait CandidateAnalyzer: Send + Sync {
    async fn analyze(&self, resume_location: &str, jd_text: &str) -> Result<AnalysisResult>;
}

/// Orchestrates extraction and scoring for one comparison. Holds only
/// read-only shared state; every call is a pure function of its inputs.
pub struct Analyzer {
    vocabulary: Arc<SkillVocabulary>,
    fields: FieldExtractor,
    semantic: Arc<SemanticScorer>,
    weights: Weights,
    fetcher: DocumentFetcher,
}

impl Analyzer {
    pub fn new(
        vocabulary: Arc<SkillVocabulary>,
        semantic: Arc<SemanticScorer>,
        weights: Weights,
        fetch_timeout: Duration,
    ) -> Result<Self> {
        weights.validate()?;
        Ok(Self {
            vocabulary,
            fields: FieldExtractor::new()?,
            semantic,
            weights,
            fetcher: DocumentFetcher::new(fetch_timeout)?,
        })
    }

    /// Wire everything from configuration: vocabulary (with configured
    /// extra terms), semantic strategy, weights, and fetch timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let vocabulary = Arc::new(SkillVocabulary::with_extra_terms(
            &config.vocabulary.extra_skills,
        )?);
        let semantic = Arc::new(SemanticScorer::from_config(config));
        let weights = Weights::from_config(&config.scoring)?;
        Self::new(
            vocabulary,
            semantic,
            weights,
            Duration::from_secs(config.fetch.timeout_secs),
        )
    }

    /// Compare both texts directly. Scoring faults degrade individual
    /// sub-scores; this path itself cannot fail.
    pub fn analyze_text(&self, resume_text: &str, jd_text: &str) -> AnalysisResult {
        let resume_skills = self.vocabulary.extract(resume_text);
        let jd_skills = self.vocabulary.extract(jd_text);

        let resume_fields = self.fields.extract(resume_text);
        let jd_fields = self.fields.extract(jd_text);

        let skill = skill_score(&resume_skills, &jd_skills);
        let lexical = lexical_similarity(resume_text, jd_text);
        let semantic = self.semantic.score(resume_text, jd_text);
        let hybrid = self.weights.combine(skill, lexical.value, semantic.value);

        let matched_skills: Vec<String> =
            resume_skills.intersection(&jd_skills).cloned().collect();
        let missing_skills: Vec<String> = jd_skills.difference(&resume_skills).cloned().collect();

        AnalysisResult {
            resume_skills: resume_skills.into_iter().collect(),
            jd_skills: jd_skills.into_iter().collect(),
            matched_skills,
            missing_skills,
            resume_fields,
            jd_fields,
            skill_score: skill,
            lexical_score: lexical.value,
            semantic_score: semantic.value,
            hybrid_score: hybrid,
            lexical_source: lexical.source,
            semantic_source: semantic.source,
            ai_feedback: None,
        }
    }
}

#[async_trait]
impl CandidateAnalyzer for Analyzer {
    /// Fetch and extract the resume, then compare. Acquisition failures
    /// propagate: no text means no meaningful analysis.
    async fn analyze(&self, resume_location: &str, jd_text: &str) -> Result<AnalysisResult> {
        let resume_text = self.fetcher.extract_text(resume_location).await?;
        Ok(self.analyze_text(&resume_text, jd_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> Analyzer {
        Analyzer::new(
            Arc::new(SkillVocabulary::new().unwrap()),
            Arc::new(SemanticScorer::word_overlap()),
            Weights::default(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_matched_and_missing_skills_scenario() {
        let result = analyzer().analyze_text(
            "Worked with Python and SQL on reporting pipelines.",
            "Looking for Python, SQL and React developers.",
        );

        assert_eq!(result.skill_score, 66.67);
        assert_eq!(result.matched_skills, vec!["python", "sql"]);
        assert_eq!(result.missing_skills, vec!["react"]);
    }

    #[test]
    fn test_skill_sets_are_sorted() {
        let result = analyzer().analyze_text(
            "sql python docker aws git",
            "git aws docker",
        );
        let mut sorted = result.resume_skills.clone();
        sorted.sort();
        assert_eq!(result.resume_skills, sorted);
        let mut sorted = result.matched_skills.clone();
        sorted.sort();
        assert_eq!(result.matched_skills, sorted);
    }

    #[test]
    fn test_empty_resume_text_scores_zero() {
        let result = analyzer().analyze_text("", "Python developer with SQL experience wanted.");

        assert_eq!(result.lexical_score, 0.0);
        assert_eq!(result.semantic_score, 0.0);
        assert_eq!(result.skill_score, 0.0);
        assert_eq!(result.hybrid_score, 0.0);
    }

    #[test]
    fn test_hybrid_matches_weighted_combination() {
        let result = analyzer().analyze_text(
            "Python engineer, 3+ years of experience, CGPA: 8.5",
            "Python engineer needed",
        );
        let weights = Weights::default();
        assert_eq!(
            result.hybrid_score,
            weights.combine(result.skill_score, result.lexical_score, result.semantic_score)
        );
    }

    #[test]
    fn test_fields_extracted_for_both_sides() {
        let result = analyzer().analyze_text(
            "B.Tech in Computer Science, CGPA: 8.5, 3+ years of experience",
            "Requires btech in computer science and 2 years of experience minimum",
        );

        assert_eq!(result.resume_fields.cgpa, Some(8.5));
        assert_eq!(result.resume_fields.experience_years, Some(3));
        assert_eq!(result.jd_fields.experience_years, Some(2));
        assert_eq!(result.jd_fields.degree.as_deref(), Some("btech"));
    }

    #[test]
    fn test_fallback_semantic_source_is_tagged() {
        let result = analyzer().analyze_text("python services", "python tooling");
        assert_eq!(result.semantic_source, ScoreSource::Fallback);
    }

    #[test]
    fn test_wire_field_names() {
        let result = analyzer().analyze_text("python", "python");
        let json = serde_json::to_value(&result).unwrap();
        for key in [
            "resumeSkills",
            "jdSkills",
            "matchedSkills",
            "missingSkills",
            "resumeFields",
            "jdFields",
            "skillScore",
            "lexicalScore",
            "semanticScore",
            "hybridScore",
        ] {
            assert!(json.get(key).is_some(), "missing wire field {}", key);
        }
    }
}
