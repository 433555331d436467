//! Logging configuration for persona-lens

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::config::AppConfig;
use crate::Result;

const LOG_FILE_PREFIX: &str = "persona-lens.log";

/// Initialize logging from configuration.
///
/// Console output always goes to stderr so stdout stays clean for JSON
/// output. When `logging.directory` is set, a daily rolling file is added;
/// keep the returned guard alive until exit so buffered lines are flushed.
pub fn init_logging_with_config(config: &AppConfig) -> Result<Option<WorkerGuard>> {
    init_logging_with_level(config.log_level(), config.log_directory())
}

/// Initialize logging with a custom log level and optional log directory
pub fn init_logging_with_level(level: &str, directory: Option<&str>) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_new(format!("{level},persona_lens={level}"))
        .map_err(|e| crate::PersonaError::ConfigError(format!("Invalid log level {level}: {e}")))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match directory {
        Some(dir) => {
            let logs_dir = Path::new(dir);
            if !logs_dir.exists() {
                std::fs::create_dir_all(logs_dir)?;
            }

            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(non_blocking)
                .with_ansi(false); // No colors in file

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| crate::PersonaError::Custom(format!("Logging already initialized: {e}")))?;

    tracing::debug!(level, ?directory, "Logging initialized");

    Ok(guard)
}

/// Initialize simple logging for testing
pub fn init_simple_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| crate::PersonaError::Custom(format!("Logging already initialized: {e}")))?;

    tracing::info!("Simple logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_initialization() {
        // A second init in the same process returns an error instead of panicking
        let _ = init_simple_logging();
        assert!(init_simple_logging().is_err());
    }
}
