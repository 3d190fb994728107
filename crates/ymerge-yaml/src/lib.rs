//! # ymerge-yaml
//!
//! YAML parsing with source location tracking, plus serialization back to
//! text.
//!
//! This crate is the document loader for the ymerge pipeline. [`parse`] and
//! [`parse_file`] turn raw YAML text into a [`YamlNode`] tree in which every
//! node carries a [`SourceInfo`], so later pipeline stages can report errors
//! as `file:line:col` without re-reading the input. [`emit`] renders a
//! `yaml_rust2::Yaml` tree back to a string.
//!
//! ## Example
//!
//! ```rust
//! use ymerge_yaml::parse_file;
//!
//! let node = parse_file("title: My Document", "config.yaml").unwrap();
//! let title = node.get("title").unwrap();
//! assert_eq!(title.source.file.as_deref(), Some("config.yaml"));
//! ```

mod emitter;
mod error;
mod node;
mod parser;
mod source;

pub use emitter::emit;
pub use error::{Error, Result};
pub use node::{MappingEntry, YamlNode, YamlNodeKind};
pub use parser::{parse, parse_file};
pub use source::SourceInfo;
