//! Deep merge of ordered YAML document trees.
//!
//! This crate is the merge engine of the ymerge pipeline. Parsed documents
//! (from `ymerge-yaml`) are converted into [`Value`] trees and folded left to
//! right with [`merge_all`]: later documents strictly override earlier ones
//! at the same path.
//!
//! # Merge semantics
//!
//! - A scalar overlay always wins, even over a sequence or mapping base.
//! - Sequences concatenate: base items first, overlay items after, no
//!   deduplication.
//! - Mappings merge field-wise over the union of their keys; key order is
//!   the base's order followed by keys only the overlay has.
//! - A sequence and a mapping at the same path cannot be reconciled: the
//!   whole merge fails with [`ConfigError::KindMismatch`], no partial result.
//!
//! Absence is structural: a key missing from one side is filled from the
//! other, and a present-but-"falsy" value (`0`, `""`, `false`, `null`) is an
//! override like any other scalar.
//!
//! # Example
//!
//! ```rust
//! use ymerge_config::{merge_all, value_from_yaml};
//!
//! let base = value_from_yaml(ymerge_yaml::parse("a: 1\nb: 2").unwrap()).unwrap();
//! let overlay = value_from_yaml(ymerge_yaml::parse("b: 3\nc: 4").unwrap()).unwrap();
//!
//! let merged = merge_all(&[base, overlay]).unwrap();
//! let out = ymerge_yaml::emit(&merged.to_yaml()).unwrap();
//! assert_eq!(out, "a: 1\nb: 3\nc: 4\n");
//! ```

mod convert;
mod error;
mod merge;
mod value;

pub use convert::value_from_yaml;
pub use error::ConfigError;
pub use merge::{merge, merge_all};
pub use value::{Kind, Value, ValueKind};

// Re-export for convenience
pub use ymerge_yaml::SourceInfo;
