//! Tracing setup: subscriber installation, span macros, and structured log events.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

use ysrn_core::config::ObservabilityConfig;
use ysrn_core::errors::{YsrnError, YsrnResult};

/// Environment variable consulted before the configured log level.
pub const LOG_ENV_VAR: &str = "YSRN_LOG";

/// Install the global subscriber.
///
/// `YSRN_LOG` wins over `config.log_level`. Fails if a global subscriber
/// is already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> YsrnResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| YsrnError::ConfigError(format!("invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    let result = if config.json {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| YsrnError::ConfigError(format!("tracing already initialized: {e}")))
}

/// Install a JSON subscriber with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) -> YsrnResult<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| YsrnError::ConfigError(format!("invalid log filter: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init()
        .map_err(|e| YsrnError::ConfigError(format!("tracing already initialized: {e}")))
}
