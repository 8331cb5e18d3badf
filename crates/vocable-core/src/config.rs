use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::types::MasteryThreshold;

/// Top-level configuration for Vocable.
///
/// Loaded from `~/.vocable/config.toml` by default. Every section falls back
/// to its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocableConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
}

impl VocableConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// mastery threshold is out of range.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: VocableConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Dictation scoring settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Minimum accuracy percentage (inclusive) for an attempt to count as correct.
    pub mastery_threshold: MasteryThreshold,
}

/// Progress tracking settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Consecutive correct attempts needed before a sentence counts as mastered.
    pub required_streak: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self { required_streak: 3 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VocableError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = VocableConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.scoring.mastery_threshold.value(), 80);
        assert_eq!(config.progress.required_streak, 3);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"

[scoring]
mastery_threshold = 90

[progress]
required_streak = 5
"#;
        let file = create_temp_config(content);
        let config = VocableConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.scoring.mastery_threshold.value(), 90);
        assert_eq!(config.progress.required_streak, 5);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[scoring]
mastery_threshold = 70
"#;
        let file = create_temp_config(content);
        let config = VocableConfig::load(file.path()).unwrap();
        assert_eq!(config.scoring.mastery_threshold.value(), 70);
        // Remaining fields use defaults
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.progress.required_streak, 3);
    }

    #[test]
    fn test_load_rejects_out_of_range_threshold() {
        let content = r#"
[scoring]
mastery_threshold = 120
"#;
        let file = create_temp_config(content);
        let err = VocableConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, VocableError::Config(_)));
        assert!(err.to_string().contains("120"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is {{ not valid TOML");
        assert!(VocableConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = VocableConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.scoring.mastery_threshold, MasteryThreshold::DEFAULT);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = VocableConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.scoring.mastery_threshold.value(), 80);
    }

    #[test]
    fn test_save_creates_parent_dirs_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("dir").join("config.toml");

        let mut config = VocableConfig::default();
        config.scoring.mastery_threshold = MasteryThreshold::new(65).unwrap();
        config.progress.required_streak = 2;
        config.save(&path).unwrap();

        assert!(path.exists());
        let reloaded = VocableConfig::load(&path).unwrap();
        assert_eq!(reloaded.scoring.mastery_threshold.value(), 65);
        assert_eq!(reloaded.progress.required_streak, 2);
        assert_eq!(reloaded.general.log_level, "info");
    }
}
