//! Resume matcher library

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod feedback;
pub mod input;
pub mod ranking;
pub mod scoring;

pub use analyzer::{AnalysisResult, Analyzer, CandidateAnalyzer};
pub use config::Config;
pub use error::{MatcherError, Result};
pub use ranking::{CandidateRecord, RankedEntry, Ranker, RankingOutcome};
