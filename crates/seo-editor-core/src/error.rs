//! Error types for seo-editor-core.
//!
//! The scoring engine itself never fails. These errors cover the edges
//! around it: configuration loading and decoding content supplied by
//! the caller.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while decoding caller-supplied input.
#[derive(Error, Debug)]
pub enum InputError {
    /// A content record or research context was not valid JSON.
    #[error("invalid {kind} JSON: {source}")]
    Json {
        /// What was being decoded ("content", "research").
        kind: &'static str,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias using [`InputError`].
pub type InputResult<T> = Result<T, InputError>;
