use crate::lexicon::Lexicon;
use crate::scorer::SentimentScorer;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    pub lexicon: Option<LexiconConfig>,
    pub export: Option<ExportConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_words: default_max_words(),
        }
    }
}

fn default_max_words() -> usize {
    crate::input::DEFAULT_MAX_WORDS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_batch_name")]
    pub default_name: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            default_name: default_batch_name(),
        }
    }
}

fn default_batch_name() -> String {
    "Batch 1".to_string()
}

/// Word list overrides. Each list that is present replaces the built-in one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub positive: Option<Vec<String>>,
    pub negative: Option<Vec<String>>,
    pub neutral: Option<Vec<String>>,
    pub intensifiers: Option<Vec<String>>,
    pub negations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub default_format: String, // json, csv or html
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            batch: BatchConfig::default(),
            lexicon: None,
            export: Some(ExportConfig {
                default_format: "json".to_string(),
            }),
            logging: Some(LoggingConfig {
                level: "info".to_string(),
            }),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {path}"))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {path}"))?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {path}"))?;
        Ok(())
    }

    /// Scorer using the configured lexicon, or the shared default when none is set.
    pub fn scorer(&self) -> SentimentScorer {
        match &self.lexicon {
            Some(lexicon) => SentimentScorer::new(Arc::new(Lexicon::from_config(lexicon))),
            None => SentimentScorer::default(),
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::SentimentLabel;

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.input.max_words, 500);
        assert_eq!(config.batch.default_name, "Batch 1");
        assert!(config.lexicon.is_none());
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_lexicon_override_from_yaml() {
        let yaml = r#"
input:
  max_words: 50
lexicon:
  negative:
    - "meh"
logging:
  level: "debug"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.input.max_words, 50);
        assert_eq!(config.log_level(), log::LevelFilter::Debug);

        let scorer = config.scorer();
        assert_eq!(scorer.score("meh").sentiment, SentimentLabel::Negative);
        assert_eq!(scorer.score("terrible").sentiment, SentimentLabel::Neutral);
        assert_eq!(scorer.score("love").sentiment, SentimentLabel::Positive);
    }

    #[test]
    fn test_config_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "sentiment-lens-config-{}.yaml",
            uuid::Uuid::new_v4()
        ));
        let path = path.to_string_lossy().to_string();

        let mut config = Config::default();
        config.batch.default_name = "Reviews".to_string();
        config.to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.batch.default_name, "Reviews");
        assert_eq!(loaded.export.unwrap().default_format, "json");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Config::from_file("/nonexistent/sentiment-lens.yaml").is_err());
    }
}
