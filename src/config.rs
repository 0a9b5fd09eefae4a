//! Library configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`NMATH_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use thiserror::Error;

use crate::Scalar;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NMathConfig {
    /// Tolerance used by [`crate::compare`]
    #[serde(default)]
    pub tolerance: ToleranceConfig,
    /// Formatting used by [`crate::format`]
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logger setup used by [`crate::logging`]
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl NMathConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`NMATH_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // NMATH_DISPLAY__PRECISION=3 -> display.precision = 3
        figment = figment.merge(Env::prefixed("NMATH_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Load configuration, falling back to defaults if any source is malformed
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("{e}. Using defaults.");
            Self::default()
        })
    }
}

/// Tolerance for approximate comparisons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToleranceConfig {
    /// Absolute difference below which two values are equal
    pub epsilon: Scalar,
    /// Relative difference below which two values are equal
    pub max_relative: Scalar,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-5,
            max_relative: 1e-5,
        }
    }
}

/// Human-readable rendering of values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Digits after the decimal point; shortest round-trip form when unset
    #[serde(default)]
    pub precision: Option<usize>,
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter (error, warn, info, debug, trace); `RUST_LOG` overrides it
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
#[error("Configuration error: {message}")]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}
