//! Error types for YAML loading and serialization.

use crate::SourceInfo;
use thiserror::Error;

/// Result type alias for ymerge-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or emitting YAML.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// YAML syntax error from the underlying scanner.
    #[error("parse error: {message}")]
    Parse {
        message: String,
        location: Option<SourceInfo>,
    },

    /// The input contained no YAML document at all.
    #[error("no YAML document found")]
    EmptyStream,

    /// An alias referenced an anchor whose node is not available, such as
    /// an anchor that is still under construction (a self-referential
    /// alias).
    #[error("cannot resolve anchor alias at {location}")]
    UnknownAlias { location: SourceInfo },

    /// Serialization failed.
    #[error("emit error: {0}")]
    Emit(String),
}

impl From<yaml_rust2::ScanError> for Error {
    fn from(err: yaml_rust2::ScanError) -> Self {
        // The scanner's message already includes line/column information.
        Error::Parse {
            message: err.to_string(),
            location: None,
        }
    }
}

impl From<yaml_rust2::EmitError> for Error {
    fn from(err: yaml_rust2::EmitError) -> Self {
        Error::Emit(err.to_string())
    }
}
