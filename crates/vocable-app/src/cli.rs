//! CLI argument definitions for the Vocable application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vocable_core::error::Result;
use vocable_core::types::MasteryThreshold;

/// Vocable: scores dictation attempts against reference sentences.
#[derive(Parser, Debug)]
#[command(name = "vocable", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Mastery threshold in percent (0-100).
    #[arg(short = 't', long = "threshold", global = true)]
    pub threshold: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score one attempt and print the result as JSON.
    Score {
        /// The sentence the learner heard.
        reference: String,
        /// What the learner typed.
        submitted: String,
    },
    /// Score a JSON Lines file of `{"reference", "submitted"}` records.
    Batch {
        /// Input file, one JSON object per line.
        input: PathBuf,
        /// Write results here instead of stdout.
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > VOCABLE_CONFIG env var > platform default (~/.vocable/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("VOCABLE_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the mastery threshold.
    ///
    /// Priority: --threshold flag > VOCABLE_THRESHOLD env var > config file value.
    /// An out-of-range flag is an error; an unparsable env var is ignored.
    pub fn resolve_threshold(&self, config_threshold: MasteryThreshold) -> Result<MasteryThreshold> {
        if let Some(t) = self.threshold {
            return MasteryThreshold::new(t);
        }
        threshold_from_env(std::env::var("VOCABLE_THRESHOLD").ok(), config_threshold)
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Apply a `VOCABLE_THRESHOLD` value over the config threshold.
///
/// An out-of-range value is an error; an unparsable one is ignored.
fn threshold_from_env(
    value: Option<String>,
    config_threshold: MasteryThreshold,
) -> Result<MasteryThreshold> {
    let Some(val) = value else {
        return Ok(config_threshold);
    };
    match val.trim().parse::<u32>() {
        Ok(t) => MasteryThreshold::new(t),
        Err(_) => {
            tracing::warn!(value = %val, "Ignoring unparsable VOCABLE_THRESHOLD");
            Ok(config_threshold)
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".vocable").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".vocable").join("config.toml");
    }
    PathBuf::from("config.toml")
}
