//! Unified error type

use thiserror::Error;

use crate::config::ConfigError;
use crate::{BoundsError, VectorError};

/// Any error raised by the nmath crates
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
