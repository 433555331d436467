use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use tracing::warn;

use crate::batch::MAX_POSTS;

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "persona-lens.toml";
pub const EXAMPLE_CONFIG_FILE: &str = "config.example.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub backtrace: bool,
    /// Directory for rolling log files; `None` logs to stderr only
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            backtrace: false,
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Posts kept per batch; extra lines are dropped silently
    #[serde(default = "default_max_posts")]
    pub max_posts: usize,
    /// Target used by `gap` when none is given
    #[serde(default = "default_target")]
    pub default_target: String,
}

pub(crate) fn default_max_posts() -> usize {
    MAX_POSTS
}

pub(crate) fn default_target() -> String {
    "elite".to_string()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_posts: default_max_posts(),
            default_target: default_target(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Tries `persona-lens.toml`, then `config.example.toml`, then falls back
    /// to built-in defaults; the pipeline needs no external settings.
    pub fn load() -> crate::Result<Self> {
        if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)
        } else if Path::new(EXAMPLE_CONFIG_FILE).exists() {
            warn!("Using {EXAMPLE_CONFIG_FILE}. Create {CONFIG_FILE} to customise settings.");
            Self::from_file(EXAMPLE_CONFIG_FILE)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.analysis.max_posts == 0 {
            return Err(crate::PersonaError::ConfigError(
                "analysis.max_posts must be at least 1".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(crate::PersonaError::ConfigError(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get log level
    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    /// Get log directory, if file logging is enabled
    pub fn log_directory(&self) -> Option<&str> {
        self.logging.directory.as_deref()
    }

    /// Get post cap per batch
    pub fn max_posts(&self) -> usize {
        self.analysis.max_posts
    }

    /// Get default target archetype id
    pub fn default_target(&self) -> &str {
        &self.analysis.default_target
    }
}
