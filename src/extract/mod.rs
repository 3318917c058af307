//! Structured signal extraction from free text

pub mod fields;
pub mod skills;

pub use fields::{ExtractedFields, FieldExtractor};
pub use skills::SkillVocabulary;
