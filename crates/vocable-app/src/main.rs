//! Vocable application binary - composition root.
//!
//! Ties the Vocable crates into a single executable:
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML
//! 3. Initialise tracing (stderr, so stdout carries only JSON)
//! 4. Score a single attempt or a JSON Lines batch

mod batch;
mod cli;

use clap::Parser;

use vocable_core::config::VocableConfig;
use vocable_dictation::{DictationScorer, ProgressTracker};

use cli::{CliArgs, Command};

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Configuration is read before tracing exists so its log level can apply;
    // a load failure is reported once the subscriber is up.
    let config_file = args.resolve_config_path();
    let loaded = VocableConfig::load(&config_file);
    let config_level = loaded
        .as_ref()
        .map(|c| c.general.log_level.clone())
        .unwrap_or_else(|_| VocableConfig::default().general.log_level);
    init_tracing(&args.resolve_log_level(&config_level));

    let config = match loaded {
        Ok(config) => {
            tracing::info!(path = %config_file.display(), "Configuration loaded");
            config
        }
        Err(e) => {
            tracing::warn!(
                path = %config_file.display(),
                error = %e,
                "Failed to load config. Using defaults."
            );
            VocableConfig::default()
        }
    };

    let threshold = args.resolve_threshold(config.scoring.mastery_threshold)?;
    let scorer = DictationScorer::with_threshold(threshold);
    tracing::debug!(%threshold, "Scorer ready");

    match args.command {
        Command::Score {
            reference,
            submitted,
        } => {
            let result = scorer.score(&reference, &submitted);
            println!("{}", serde_json::to_string(&result)?);
        }
        Command::Batch { input, output } => {
            let mut tracker = ProgressTracker::from_config(&config.progress);
            batch::score_file(&input, output.as_deref(), &scorer, &mut tracker)?;

            let summary = tracker.summary();
            tracing::info!(
                sentences = summary.sentences,
                attempts = summary.attempts,
                correct = summary.correct,
                mastered = summary.mastered,
                mean_accuracy = summary.mean_accuracy,
                "Progress summary"
            );
        }
    }

    Ok(())
}
