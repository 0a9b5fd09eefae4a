//! Logger initialisation
//!
//! The library crates only emit through the `log` facade. Applications that
//! want those records can install `env_logger` here, with the default filter
//! taken from [`LoggingConfig`]. `RUST_LOG` still wins when set.

use env_logger::{Builder, Env};
use log::SetLoggerError;

use crate::config::LoggingConfig;

/// Build a logger whose default filter is `config.level`
pub fn builder(config: &LoggingConfig) -> Builder {
    Builder::from_env(Env::default().default_filter_or(config.level.as_str()))
}

/// Install the global logger
///
/// Returns an error if a logger is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), SetLoggerError> {
    builder(config).try_init()?;
    log::info!("Logging initialised at level '{}'", config.level);
    Ok(())
}
