//! Configured formatting

use std::fmt::Display;

use crate::config::DisplayConfig;

/// Render `value` using the configured precision
///
/// Vectors forward the precision to each component.
pub fn format_value<T: Display + ?Sized>(value: &T, display: &DisplayConfig) -> String {
    match display.precision {
        Some(precision) => format!("{value:.precision$}"),
        None => value.to_string(),
    }
}
