//! Configuration error type.
//!
//! The engine itself never fails at runtime; the only fallible step is
//! accepting a [`ColonyConfig`][crate::ColonyConfig].  Sub-crates wrap
//! `CoreError` as one variant of their own error enums via `From`.

use thiserror::Error;

/// Errors raised while validating colony configuration.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{what} must be in {range}, got {value}")]
    OutOfRange {
        what:  &'static str,
        range: &'static str,
        value: f64,
    },
}

/// Shorthand result type for all `ant-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
