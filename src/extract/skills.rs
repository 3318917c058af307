//! Skill extraction against a fixed vocabulary

use crate::error::{MatcherError, Result};
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::BTreeSet;

/// Immutable skill vocabulary with a prebuilt case-insensitive matcher.
///
/// Built once at startup and shared by reference across comparisons.
/// Matching is containment-style so multi-word terms like "problem solving"
/// are found; a term only counts when the occurrence is bounded by
/// non-alphanumeric characters, so "go" does not fire inside "google".
pub struct SkillVocabulary {
    terms: Vec<String>,
    matcher: AhoCorasick,
}

impl SkillVocabulary {
    /// Build the vocabulary from the built-in term list.
    pub fn new() -> Result<Self> {
        Self::with_extra_terms(&[])
    }

    /// Build the vocabulary with additional terms merged in.
    pub fn with_extra_terms(extra: &[String]) -> Result<Self> {
        let mut terms: Vec<String> = default_terms().iter().map(|s| s.to_string()).collect();
        terms.extend(extra.iter().map(|s| s.trim().to_lowercase()));
        terms.retain(|t| !t.is_empty());
        terms.sort();
        terms.dedup();

        // Prefer longer matches so "tailwind css" wins over "css" at the
        // same position.
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&terms)
            .map_err(|e| {
                MatcherError::InvalidInput(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self { terms, matcher })
    }

    /// Vocabulary terms present in the text, sorted.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        let bytes = lowered.as_bytes();
        let mut found = BTreeSet::new();

        for mat in self.matcher.find_iter(&lowered) {
            if is_bounded(bytes, mat.start(), mat.end()) {
                found.insert(self.terms[mat.pattern().as_usize()].clone());
            }
        }

        found
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// An occurrence counts only when it does not sit inside a larger word.
pub(crate) fn is_bounded(bytes: &[u8], start: usize, end: usize) -> bool {
    let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before_ok && after_ok
}

/// Recognized skill terms, technical and soft.
fn default_terms() -> &'static [&'static str] {
    &[
        // Languages
        "python", "java", "c", "c++", "c#", "javascript", "typescript", "ruby", "go", "rust",
        "bash", "shell",
        // Data / ML
        "numpy", "pandas", "matplotlib", "scikit-learn", "tensorflow", "keras", "seaborn",
        "excel", "sql",
        // Web
        "html", "css", "tailwind css", "react", "angular", "vue", "express", "node.js",
        "next.js", "mongo", "mongodb", "django", "flask", "fastapi", "rest", "restful api",
        "graphql", "axios", "mongoose",
        // Tooling / infrastructure
        "git", "github", "postman", "linux", "wsl", "docker", "kubernetes", "vim", "vs code",
        "firebase", "aws", "azure",
        // Networking
        "tcp/ip", "udp", "arp", "routing", "osi model", "bgp", "md5", "multicast", "http",
        "dns", "ip addressing",
        // Misc
        "socket.io", "cloudinary", "fuse.js", "jira", "figma", "power bi", "tableau",
        // Soft skills
        "communication", "leadership", "problem solving", "teamwork", "analytical thinking",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> SkillVocabulary {
        SkillVocabulary::new().unwrap()
    }

    #[test]
    fn test_single_word_terms() {
        let skills = vocab().extract("Experienced with Python, SQL and Docker.");
        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
        assert!(skills.contains("docker"));
    }

    #[test]
    fn test_multi_word_terms_are_found() {
        let skills = vocab().extract("Strong problem solving and analytical thinking.");
        assert!(skills.contains("problem solving"));
        assert!(skills.contains("analytical thinking"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let skills = vocab().extract("PYTHON and TaIlWiNd CSS");
        assert!(skills.contains("python"));
        assert!(skills.contains("tailwind css"));
    }

    #[test]
    fn test_term_inside_larger_word_is_ignored() {
        let skills = vocab().extract("We searched google for directions.");
        assert!(!skills.contains("go"));
    }

    #[test]
    fn test_longest_term_wins_at_same_position() {
        let skills = vocab().extract("styling with tailwind css only");
        assert!(skills.contains("tailwind css"));
    }

    #[test]
    fn test_extra_terms_are_merged() {
        let vocab = SkillVocabulary::with_extra_terms(&["Terraform".to_string()]).unwrap();
        let skills = vocab.extract("provisioned with terraform");
        assert!(skills.contains("terraform"));
    }

    #[test]
    fn test_output_is_sorted() {
        let skills: Vec<String> = vocab()
            .extract("sql python docker aws")
            .into_iter()
            .collect();
        let mut sorted = skills.clone();
        sorted.sort();
        assert_eq!(skills, sorted);
    }
}
