//! Reviewer-facing feedback rendered from an analysis record

use crate::analyzer::AnalysisResult;
use crate::error::Result;
use crate::extract::ExtractedFields;

/// Turns an analysis into reviewer-facing text. The shipped implementation
/// is rule-based; a generative-text service sits behind the same trait as
/// an external collaborator, and its output is treated as opaque text.
pub trait FeedbackGenerator {
    fn generate(&self, analysis: &AnalysisResult) -> Result<String>;
}

/// Template-driven bullets: missing skills, eligibility annotations against
/// the JD's extracted fields, and a match summary. Field checks only ever
/// annotate; they never gate a candidate.
pub struct RuleBasedFeedback;

impl RuleBasedFeedback {
    pub fn new() -> Self {
        Self
    }

    fn skills_bullet(&self, analysis: &AnalysisResult) -> String {
        if analysis.jd_skills.is_empty() {
            return "- Skills: the job description lists no recognized skills to match against."
                .to_string();
        }
        if analysis.missing_skills.is_empty() {
            return format!(
                "- Skills: covers all {} skills the job description asks for.",
                analysis.jd_skills.len()
            );
        }
        format!(
            "- Missing skills: {} (matched {}/{}).",
            analysis.missing_skills.join(", "),
            analysis.matched_skills.len(),
            analysis.jd_skills.len()
        )
    }

    fn eligibility_bullets(&self, resume: &ExtractedFields, jd: &ExtractedFields) -> Vec<String> {
        let mut bullets = Vec::new();

        if let Some(required) = jd.cgpa {
            bullets.push(match resume.cgpa {
                Some(actual) if actual >= required => {
                    format!("- CGPA: {} meets the stated minimum of {}.", actual, required)
                }
                Some(actual) => {
                    format!("- CGPA: {} is below the stated minimum of {}.", actual, required)
                }
                None => format!(
                    "- CGPA: not stated on the resume; the job description asks for {}.",
                    required
                ),
            });
        }

        if let Some(required) = jd.experience_years {
            bullets.push(match resume.experience_years {
                Some(actual) if actual >= required => format!(
                    "- Experience: {} years meets the {} year requirement.",
                    actual, required
                ),
                Some(actual) => format!(
                    "- Experience: {} years against a {} year requirement.",
                    actual, required
                ),
                None => format!(
                    "- Experience: not stated; the job description asks for {} years.",
                    required
                ),
            });
        }

        if let Some(required) = &jd.degree {
            bullets.push(match &resume.degree {
                Some(actual) if actual == required => {
                    format!("- Degree: {} matches the requirement.", actual)
                }
                Some(actual) => format!(
                    "- Degree: resume states {}, job description asks for {}.",
                    actual, required
                ),
                None => format!("- Degree: not stated; the job description asks for {}.", required),
            });
        }

        if let Some(required) = &jd.branch {
            bullets.push(match &resume.branch {
                Some(actual) if actual == required => {
                    format!("- Branch: {} matches the requirement.", actual)
                }
                Some(actual) => format!(
                    "- Branch: resume states {}, job description asks for {}.",
                    actual, required
                ),
                None => format!("- Branch: not stated; the job description asks for {}.", required),
            });
        }

        bullets
    }

    fn summary_bullet(&self, analysis: &AnalysisResult) -> String {
        let verdict = match analysis.hybrid_score {
            s if s >= 75.0 => "a strong match",
            s if s >= 50.0 => "a moderate match",
            s if s >= 25.0 => "a partial match",
            _ => "a weak match",
        };
        format!(
            "- Summary: {} (hybrid {:.2}; skill {:.2}, lexical {:.2}, semantic {:.2}).",
            verdict,
            analysis.hybrid_score,
            analysis.skill_score,
            analysis.lexical_score,
            analysis.semantic_score
        )
    }
}

impl Default for RuleBasedFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackGenerator for RuleBasedFeedback {
    fn generate(&self, analysis: &AnalysisResult) -> Result<String> {
        let mut bullets = vec![self.skills_bullet(analysis)];
        bullets.extend(self.eligibility_bullets(&analysis.resume_fields, &analysis.jd_fields));
        bullets.push(self.summary_bullet(analysis));
        Ok(bullets.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreSource;

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            resume_skills: vec!["python".into(), "sql".into()],
            jd_skills: vec!["python".into(), "react".into(), "sql".into()],
            matched_skills: vec!["python".into(), "sql".into()],
            missing_skills: vec!["react".into()],
            resume_fields: ExtractedFields {
                cgpa: Some(8.5),
                experience_years: Some(3),
                degree: Some("btech".into()),
                branch: None,
            },
            jd_fields: ExtractedFields {
                cgpa: Some(7.0),
                experience_years: Some(5),
                degree: Some("btech".into()),
                branch: Some("computer science".into()),
            },
            skill_score: 66.67,
            lexical_score: 40.0,
            semantic_score: 55.0,
            hybrid_score: 55.17,
            lexical_source: ScoreSource::Exact,
            semantic_source: ScoreSource::Fallback,
            ai_feedback: None,
        }
    }

    #[test]
    fn test_missing_skills_are_listed() {
        let text = RuleBasedFeedback::new().generate(&analysis()).unwrap();
        assert!(text.contains("Missing skills: react"));
        assert!(text.contains("matched 2/3"));
    }

    #[test]
    fn test_eligibility_annotations() {
        let text = RuleBasedFeedback::new().generate(&analysis()).unwrap();
        assert!(text.contains("8.5 meets the stated minimum of 7"));
        assert!(text.contains("3 years against a 5 year requirement"));
        assert!(text.contains("btech matches the requirement"));
        assert!(text.contains("Branch: not stated"));
    }

    #[test]
    fn test_summary_band() {
        let text = RuleBasedFeedback::new().generate(&analysis()).unwrap();
        assert!(text.contains("a moderate match"));
    }

    #[test]
    fn test_jd_without_field_requirements_adds_no_annotations() {
        let mut a = analysis();
        a.jd_fields = ExtractedFields::default();
        let text = RuleBasedFeedback::new().generate(&a).unwrap();
        assert!(!text.contains("CGPA"));
        assert!(!text.contains("Degree"));
    }

    #[test]
    fn test_full_skill_coverage_bullet() {
        let mut a = analysis();
        a.missing_skills = vec![];
        let text = RuleBasedFeedback::new().generate(&a).unwrap();
        assert!(text.contains("covers all 3 skills"));
    }
}
