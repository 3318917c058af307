//! Resume matcher: score resumes against job descriptions and rank candidates

mod analyzer;
mod cli;
mod config;
mod error;
mod extract;
mod feedback;
mod input;
mod ranking;
mod scoring;

use analyzer::{Analyzer, CandidateAnalyzer};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::{MatcherError, Result};
use feedback::{FeedbackGenerator, RuleBasedFeedback};
use log::{error, info};
use ranking::{CandidateRecord, Ranker, RankingOutcome};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            jd,
            output,
            no_feedback,
        } => {
            let output_format = cli::parse_output_format(&output).map_err(MatcherError::InvalidInput)?;
            let jd_text = std::fs::read_to_string(&jd)?;

            info!("Analyzing {} against {}", resume, jd.display());
            let analyzer = Analyzer::from_config(&config)?;
            let mut result = analyzer.analyze(&resume, &jd_text).await?;

            if !no_feedback {
                let feedback = RuleBasedFeedback::new().generate(&result)?;
                result.attach_feedback(feedback);
            }

            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Console => print_analysis(&result),
            }
        }

        Commands::Rank {
            jd,
            candidates,
            top,
            output,
        } => {
            let output_format = cli::parse_output_format(&output).map_err(MatcherError::InvalidInput)?;
            let jd_text = std::fs::read_to_string(&jd)?;
            let manifest = std::fs::read_to_string(&candidates)?;
            let records: Vec<CandidateRecord> = serde_json::from_str(&manifest)?;

            if records.is_empty() {
                println!("No candidates available in manifest");
                return Ok(());
            }

            info!("Ranking {} candidates", records.len());
            let analyzer = Arc::new(Analyzer::from_config(&config)?);
            let ranker = Ranker::from_config(analyzer, &config.ranking)
                .with_top_n(top.unwrap_or(config.ranking.top_n));
            let outcome = ranker.rank(&jd_text, records).await;

            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
                OutputFormat::Console => print_ranking(&outcome),
            }
        }

        Commands::Config => {
            println!("⚙️  Current Configuration\n");
            println!("Models Directory: {}", config.models.models_dir.display());
            println!("Embedding Model: {}", config.models.embedding_model);
            println!("\nScoring Weights:");
            println!("  Skill overlap: {:.1}%", config.scoring.skill_weight * 100.0);
            println!("  Lexical: {:.1}%", config.scoring.lexical_weight * 100.0);
            println!("  Semantic: {:.1}%", config.scoring.semantic_weight * 100.0);
            println!("\nRanking:");
            println!("  Top N: {}", config.ranking.top_n);
            println!("  Concurrency: {}", config.ranking.concurrency);
            println!("Fetch timeout: {}s", config.fetch.timeout_secs);
            if !config.vocabulary.extra_skills.is_empty() {
                println!("Extra skill terms: {}", config.vocabulary.extra_skills.join(", "));
            }
        }
    }

    Ok(())
}

fn print_analysis(result: &analyzer::AnalysisResult) {
    println!("\n📊 Match Scores:");
    println!("  • Hybrid: {:.2}", result.hybrid_score);
    println!("  • Skill overlap: {:.2}", result.skill_score);
    println!("  • Lexical: {:.2}", result.lexical_score);
    println!(
        "  • Semantic: {:.2}{}",
        result.semantic_score,
        match result.semantic_source {
            scoring::ScoreSource::Fallback => " (word-overlap approximation)",
            scoring::ScoreSource::Failed => " (scorer degraded)",
            scoring::ScoreSource::Exact => "",
        }
    );

    println!("\n🎯 Skills:");
    println!("  • Matched: {}", join_or_dash(&result.matched_skills));
    println!("  • Missing: {}", join_or_dash(&result.missing_skills));

    if let Some(feedback) = &result.ai_feedback {
        println!("\n💡 Feedback:");
        println!("{}", feedback);
    }
}

fn print_ranking(outcome: &RankingOutcome) {
    println!(
        "\n📊 Processed {} candidates, skipped {}",
        outcome.processed_count, outcome.skipped_count
    );

    if outcome.entries.is_empty() {
        if outcome.processed_count == 0 && outcome.skipped_count > 0 {
            println!("⚠️  No candidate could be processed; check resume locations");
        } else {
            println!("No resumes available to rank");
        }
        return;
    }

    println!("\n🏆 Top matches:");
    for (i, entry) in outcome.entries.iter().enumerate() {
        println!(
            "  {}. {}  hybrid {:.2} (skill {:.2}, lexical {:.2}, semantic {:.2})",
            i + 1,
            entry.candidate.email,
            entry.analysis.hybrid_score,
            entry.analysis.skill_score,
            entry.analysis.lexical_score,
            entry.analysis.semantic_score
        );
        if !entry.analysis.matched_skills.is_empty() {
            println!("     Matched: {}", entry.analysis.matched_skills.join(", "));
        }
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
