//! Errors produced by conversion and merging.

use crate::value::Kind;
use thiserror::Error;
use ymerge_yaml::SourceInfo;

/// Errors that can occur while building or merging document trees.
///
/// All of these abort the whole operation; there is no partial-success
/// mode and no downgrade to a warning.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// A mapping key was not a string scalar.
    #[error("mapping keys must be strings, found `{found}` at {at}")]
    NonStringKey { found: String, at: SourceInfo },

    /// Two composite nodes at the same path have incompatible kinds.
    #[error(
        "cannot merge {base_kind} with {overlay_kind} at key `{}` ({base} vs {overlay})",
        path.join(".")
    )]
    KindMismatch {
        /// Dotted key path from the document root to the conflict
        path: Vec<String>,
        base_kind: Kind,
        overlay_kind: Kind,
        base: SourceInfo,
        overlay: SourceInfo,
    },

    /// A document's root value is not a mapping.
    #[error("top-level document must be a mapping, found {kind} at {at}")]
    InvalidRoot { kind: Kind, at: SourceInfo },

    /// The fold was given fewer than two documents.
    #[error("merging requires at least two documents, got {0}")]
    TooFewDocuments(usize),
}
