//! CLI interface for the resume matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Resume and job description matching with hybrid scoring")]
#[command(
    long_about = "Score resumes against job descriptions using skill overlap, TF-IDF and semantic similarity, and rank candidate pools"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one resume against a job description
    Analyze {
        /// Resume location: an http(s) URL or a local file path (PDF or text)
        #[arg(short, long)]
        resume: String,

        /// Path to the job description text file
        #[arg(short, long)]
        jd: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Skip the reviewer feedback section
        #[arg(long)]
        no_feedback: bool,
    },

    /// Rank a pool of candidates against a job description
    Rank {
        /// Path to the job description text file
        #[arg(short, long)]
        jd: PathBuf,

        /// Path to a JSON manifest of candidates: [{"id", "email", "resumeUrl"}]
        #[arg(short, long)]
        candidates: PathBuf,

        /// How many entries to keep
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show the active configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!("Unsupported output format: {}", other)),
    }
}
