//! Parsed YAML tree with source location tracking.

use crate::SourceInfo;
use yaml_rust2::Yaml;

/// A parsed YAML value with the source location of every node.
///
/// The tree is a plain sum type: scalars keep their `yaml_rust2::Yaml`
/// payload, sequences and mappings own their children. Mapping entries keep
/// the key as a full node so that key-shape violations (for example a
/// non-string key) can be reported with the key's own location.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlNode {
    /// Source location for this node.
    pub source: SourceInfo,

    /// The node payload.
    pub kind: YamlNodeKind,
}

/// The payload of a [`YamlNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum YamlNodeKind {
    /// A leaf value: string, integer, float, boolean, or null.
    Scalar(Yaml),

    /// An ordered sequence of nodes.
    Sequence(Vec<YamlNode>),

    /// A mapping, in document order.
    Mapping(Vec<MappingEntry>),
}

/// A key-value pair in a YAML mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingEntry {
    pub key: YamlNode,
    pub value: YamlNode,
}

impl YamlNode {
    /// Create a scalar node.
    pub fn scalar(yaml: Yaml, source: SourceInfo) -> Self {
        Self {
            source,
            kind: YamlNodeKind::Scalar(yaml),
        }
    }

    /// Create a sequence node.
    pub fn sequence(items: Vec<YamlNode>, source: SourceInfo) -> Self {
        Self {
            source,
            kind: YamlNodeKind::Sequence(items),
        }
    }

    /// Create a mapping node.
    pub fn mapping(entries: Vec<MappingEntry>, source: SourceInfo) -> Self {
        Self {
            source,
            kind: YamlNodeKind::Mapping(entries),
        }
    }

    /// Check if this is a scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, YamlNodeKind::Scalar(_))
    }

    /// Check if this is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self.kind, YamlNodeKind::Sequence(_))
    }

    /// Check if this is a mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(self.kind, YamlNodeKind::Mapping(_))
    }

    /// Get the scalar payload if this is a scalar.
    pub fn as_scalar(&self) -> Option<&Yaml> {
        match &self.kind {
            YamlNodeKind::Scalar(yaml) => Some(yaml),
            _ => None,
        }
    }

    /// Get sequence items if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[YamlNode]> {
        match &self.kind {
            YamlNodeKind::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get mapping entries if this is a mapping.
    pub fn as_mapping(&self) -> Option<&[MappingEntry]> {
        match &self.kind {
            YamlNodeKind::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a mapping value by string key.
    ///
    /// Returns `None` if this is not a mapping or the key is not present.
    /// With duplicate keys the last entry wins, matching load-time semantics.
    pub fn get(&self, key: &str) -> Option<&YamlNode> {
        match &self.kind {
            YamlNodeKind::Mapping(entries) => entries
                .iter()
                .rev()
                .find(|entry| entry.key.as_scalar().and_then(Yaml::as_str) == Some(key))
                .map(|entry| &entry.value),
            _ => None,
        }
    }

    /// Number of children (sequence length or mapping entry count).
    pub fn len(&self) -> usize {
        match &self.kind {
            YamlNodeKind::Scalar(_) => 0,
            YamlNodeKind::Sequence(items) => items.len(),
            YamlNodeKind::Mapping(entries) => entries.len(),
        }
    }

    /// Check if this node has no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
