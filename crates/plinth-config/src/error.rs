//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment-definition file exists but cannot be parsed.
    ///
    /// This is the only condition that aborts configuration evaluation:
    /// configuration errors are deterministic, so the build fails eagerly
    /// instead of retrying.
    #[error("malformed environment file {}:{line}: {reason}\n\nHint: expected KEY=VALUE lines, blank lines, or # comments", .path.display())]
    EnvFileMalformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A configuration source does not deserialize into the expected shape.
    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// A `[modes.*]` override table cannot be merged into the base config.
    #[error("invalid override in [modes.{mode}]: {message}")]
    InvalidModeOverride { mode: String, message: String },

    /// Shape-level validation failed (no filesystem access involved).
    #[error("{message}\n\nHint: {hint}")]
    SchemaValidation { message: String, hint: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
