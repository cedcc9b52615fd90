use crate::search::{GalleryItem, SearchAction};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Upper bound accepted for `step_delay_ms`.
pub const MAX_STEP_DELAY_MS: u64 = 60_000;

/// Errors that can occur when loading a demo configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

/// Script played by the demo driver.
///
/// ```toml
/// step_delay_ms = 250
///
/// [[steps]]
/// type = "Search"
/// query = "dogs"
///
/// [[steps]]
/// type = "SearchFailure"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Pause between two consecutive dispatches.
    pub step_delay_ms: u64,
    /// Actions dispatched in order.
    pub steps: Vec<SearchAction>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 1000,
            steps: vec![
                SearchAction::search("dogs"),
                SearchAction::search_success(vec![
                    GalleryItem::new("english-setter"),
                    GalleryItem::new("irish-setter"),
                ]),
                SearchAction::search("cats"),
                SearchAction::search_failure(),
            ],
        }
    }
}

impl DemoConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: DemoConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration held in memory.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - the script has at least one step
    /// - the delay does not exceed [`MAX_STEP_DELAY_MS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps.is_empty() {
            return Err(ConfigError::Validation {
                message: "At least one step must be configured".to_string(),
            });
        }

        if self.step_delay_ms > MAX_STEP_DELAY_MS {
            return Err(ConfigError::Validation {
                message: format!(
                    "step_delay_ms must be at most {MAX_STEP_DELAY_MS}, got {}",
                    self.step_delay_ms
                ),
            });
        }

        Ok(())
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_is_valid_four_step_script() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.steps.len(), 4);
        assert_eq!(config.step_delay(), Duration::from_secs(1));
    }

    #[test]
    fn parses_tagged_steps() {
        let config = DemoConfig::from_toml(
            r#"
            step_delay_ms = 5

            [[steps]]
            type = "Search"
            query = "dogs"

            [[steps]]
            type = "SearchSuccess"
            items = [{ id = "a" }, { id = "b" }]

            [[steps]]
            type = "SearchFailure"
            "#,
        )
        .unwrap();

        assert_eq!(config.step_delay_ms, 5);
        assert_eq!(
            config.steps,
            vec![
                SearchAction::search("dogs"),
                SearchAction::search_success(vec![GalleryItem::new("a"), GalleryItem::new("b")]),
                SearchAction::search_failure(),
            ]
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = DemoConfig::from_toml("step_delay_ms = 10").unwrap();
        assert_eq!(config.steps, DemoConfig::default().steps);

        let config = DemoConfig::from_toml(
            r#"
            [[steps]]
            type = "Search"
            query = "x"
            "#,
        )
        .unwrap();
        assert_eq!(config.step_delay_ms, 1000);
    }

    #[test]
    fn empty_script_is_rejected() {
        let result = DemoConfig::from_toml("steps = []");
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn excessive_delay_is_rejected() {
        let result = DemoConfig::from_toml("step_delay_ms = 60001");
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn unknown_action_type_is_parse_error() {
        let result = DemoConfig::from_toml(
            r#"
            [[steps]]
            type = "Cancel"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            step_delay_ms = 0

            [[steps]]
            type = "Search"
            query = "cats"
            "#
        )
        .unwrap();

        let config = DemoConfig::load(file.path()).unwrap();
        assert_eq!(config.steps, vec![SearchAction::search("cats")]);
        assert_eq!(config.step_delay_ms, 0);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = DemoConfig::load(&dir.path().join("absent.toml"));
        match result {
            Err(ConfigError::Read { path, .. }) => assert!(path.ends_with("absent.toml")),
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
