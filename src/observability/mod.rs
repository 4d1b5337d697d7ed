use crate::config::LogConfig;
use crate::error::JwkToolError;
use env_logger::{Builder, Target};

/// Installs the global logger. Logs always go to stderr so the transcript on
/// stdout can be copied as is.
///
/// Returns `ConfigError` if a logger is already installed.
pub fn init_logs(config: &LogConfig) -> Result<(), JwkToolError> {
    if !config.enabled {
        return Ok(());
    }

    Builder::new()
        .parse_filters(&config.level)
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .map_err(|e| JwkToolError::ConfigError(format!("could not initialise logging: {}", e)))
}
