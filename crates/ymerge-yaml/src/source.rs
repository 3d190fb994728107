//! Source location information for YAML nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source location of a YAML node in the original input text.
///
/// Locations render as `file:line:col` (or `<input>:line:col` when the
/// source has no file name), which is how every error in the merge pipeline
/// points back at the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Optional filename or source identifier
    pub file: Option<String>,

    /// Byte offset from start of source (0-based)
    pub offset: usize,

    /// Line number (1-based)
    pub line: usize,

    /// Column number (1-based)
    pub col: usize,

    /// Length in bytes
    pub len: usize,
}

impl SourceInfo {
    /// Create a SourceInfo from a `yaml-rust2` marker.
    ///
    /// The marker provides the starting position; the length must be
    /// supplied by the caller.
    pub fn from_marker(marker: &yaml_rust2::scanner::Marker, len: usize) -> Self {
        Self {
            file: None,
            offset: marker.index(),
            // yaml-rust2 markers are 0-based, locations are 1-based
            line: marker.line() + 1,
            col: marker.col() + 1,
            len,
        }
    }

    /// Create a SourceInfo spanning from a start to an end marker.
    pub fn from_span(
        start: &yaml_rust2::scanner::Marker,
        end: &yaml_rust2::scanner::Marker,
    ) -> Self {
        Self {
            file: None,
            offset: start.index(),
            line: start.line() + 1,
            col: start.col() + 1,
            len: end.index().saturating_sub(start.index()),
        }
    }

    /// Set the filename for this source location.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl Default for SourceInfo {
    fn default() -> Self {
        Self {
            file: None,
            offset: 0,
            line: 1,
            col: 1,
            len: 0,
        }
    }
}

impl fmt::Display for SourceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.file.as_deref().unwrap_or("<input>");
        write!(f, "{}:{}:{}", file, self.line, self.col)
    }
}
