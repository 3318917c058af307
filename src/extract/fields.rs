//! Eligibility field extraction: CGPA, experience, degree, branch

use crate::error::{MatcherError, Result};
use crate::extract::skills::is_bounded;
use aho_corasick::{AhoCorasick, MatchKind};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Structured eligibility fields pulled from free text. `None` means the
/// field was not found; it is never defaulted to zero or an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    pub cgpa: Option<f32>,
    pub experience_years: Option<u32>,
    pub degree: Option<String>,
    pub branch: Option<String>,
}

/// Extracts the four eligibility fields. The extractions are independent;
/// no cross-field validation happens here.
pub struct FieldExtractor {
    cgpa_pattern: Regex,
    experience_pattern: Regex,
    degrees: PhraseSet,
    branches: PhraseSet,
}

/// A fixed phrase vocabulary matched leftmost-longest, first hit wins.
struct PhraseSet {
    terms: Vec<&'static str>,
    matcher: AhoCorasick,
}

impl PhraseSet {
    fn new(terms: Vec<&'static str>) -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&terms)
            .map_err(|e| {
                MatcherError::InvalidInput(format!("Failed to build phrase matcher: {}", e))
            })?;
        Ok(Self { terms, matcher })
    }

    fn first_match(&self, lowered: &str) -> Option<String> {
        let bytes = lowered.as_bytes();
        self.matcher
            .find_iter(lowered)
            .find(|mat| is_bounded(bytes, mat.start(), mat.end()))
            .map(|mat| self.terms[mat.pattern().as_usize()].to_string())
    }
}

impl FieldExtractor {
    pub fn new() -> Result<Self> {
        // Label, at most 5 non-digit characters, then the number.
        let cgpa_pattern = Regex::new(r"(?i)\b(?:cgpa|gpa)\b[^\d]{0,5}(\d{1,2}(?:\.\d{1,2})?)")
            .map_err(|e| MatcherError::InvalidInput(format!("Invalid CGPA pattern: {}", e)))?;

        let experience_pattern =
            Regex::new(r"(?i)\b(\d{1,2})\s*\+?\s*(?:years?|yrs?)\s+(?:of\s+)?experience")
                .map_err(|e| {
                    MatcherError::InvalidInput(format!("Invalid experience pattern: {}", e))
                })?;

        let degrees = PhraseSet::new(vec![
            "btech", "b.tech", "mtech", "m.tech", "b.e", "m.e", "bachelors", "bachelor",
            "masters", "master", "bsc", "b.sc", "msc", "m.sc", "bca", "mca", "mba", "phd",
            "ph.d", "doctorate", "diploma",
        ])?;

        let branches = PhraseSet::new(vec![
            "computer science",
            "computer engineering",
            "information technology",
            "electronics and communication",
            "electronics",
            "electrical",
            "mechanical",
            "civil",
            "chemical",
            "aerospace",
            "biotechnology",
        ])?;

        Ok(Self {
            cgpa_pattern,
            experience_pattern,
            degrees,
            branches,
        })
    }

    /// Extract all four fields; first match wins for each.
    pub fn extract(&self, text: &str) -> ExtractedFields {
        let lowered = text.to_lowercase();

        ExtractedFields {
            cgpa: self.extract_cgpa(&lowered),
            experience_years: self.extract_experience(&lowered),
            degree: self.degrees.first_match(&lowered),
            branch: self.branches.first_match(&lowered),
        }
    }

    fn extract_cgpa(&self, lowered: &str) -> Option<f32> {
        self.cgpa_pattern
            .captures(lowered)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    fn extract_experience(&self, lowered: &str) -> Option<u32> {
        self.experience_pattern
            .captures(lowered)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}
