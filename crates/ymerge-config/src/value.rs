//! Core type definitions for the merge tree.

use indexmap::IndexMap;
use std::fmt;
use yaml_rust2::Yaml;
use ymerge_yaml::SourceInfo;

/// A document tree value with its source location.
///
/// This is the representation the merge engine operates on. Every node
/// remembers where it came from, so merge failures can name the offending
/// file and position.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    /// The underlying value
    pub kind: ValueKind,

    /// Source location for this value
    pub source: SourceInfo,
}

/// The kind of a document tree value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    /// Atomic value: string, integer, float, boolean, or null.
    ///
    /// An explicit `null` is a present value, distinct from an absent key.
    Scalar(Yaml),

    /// Ordered sequence. Order is significant and preserved.
    Sequence(Vec<Value>),

    /// Mapping with unique string keys. Insertion order is kept so output
    /// stays deterministic.
    Mapping(IndexMap<String, Value>),
}

/// Discriminant of a [`ValueKind`], used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Scalar,
    Sequence,
    Mapping,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Scalar => "scalar",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Create a scalar value.
    pub fn new_scalar(yaml: Yaml, source: SourceInfo) -> Self {
        Self {
            kind: ValueKind::Scalar(yaml),
            source,
        }
    }

    /// Create a sequence value.
    pub fn new_sequence(items: Vec<Value>, source: SourceInfo) -> Self {
        Self {
            kind: ValueKind::Sequence(items),
            source,
        }
    }

    /// Create a mapping value.
    pub fn new_mapping(entries: IndexMap<String, Value>, source: SourceInfo) -> Self {
        Self {
            kind: ValueKind::Mapping(entries),
            source,
        }
    }

    /// The discriminant of this value, for error reporting.
    pub fn kind(&self) -> Kind {
        match self.kind {
            ValueKind::Scalar(_) => Kind::Scalar,
            ValueKind::Sequence(_) => Kind::Sequence,
            ValueKind::Mapping(_) => Kind::Mapping,
        }
    }

    /// Check if this is a scalar value.
    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, ValueKind::Scalar(_))
    }

    /// Check if this is a sequence value.
    pub fn is_sequence(&self) -> bool {
        matches!(self.kind, ValueKind::Sequence(_))
    }

    /// Check if this is a mapping value.
    pub fn is_mapping(&self) -> bool {
        matches!(self.kind, ValueKind::Mapping(_))
    }

    /// Get the scalar payload if this is a scalar.
    pub fn as_yaml(&self) -> Option<&Yaml> {
        match &self.kind {
            ValueKind::Scalar(yaml) => Some(yaml),
            _ => None,
        }
    }

    /// Get sequence items if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match &self.kind {
            ValueKind::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get mapping entries if this is a mapping.
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        match &self.kind {
            ValueKind::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a mapping value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|entries| entries.get(key))
    }

    /// Render this tree as a raw `Yaml` value for serialization.
    ///
    /// Mapping keys come out in the mapping's stored order.
    pub fn to_yaml(&self) -> Yaml {
        match &self.kind {
            ValueKind::Scalar(yaml) => yaml.clone(),
            ValueKind::Sequence(items) => {
                Yaml::Array(items.iter().map(Value::to_yaml).collect())
            }
            ValueKind::Mapping(entries) => {
                let mut hash = yaml_rust2::yaml::Hash::new();
                for (key, value) in entries {
                    hash.insert(Yaml::String(key.clone()), value.to_yaml());
                }
                Yaml::Hash(hash)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: &str) -> Value {
        Value::new_scalar(Yaml::String(s.into()), SourceInfo::default())
    }

    fn mapping(entries: Vec<(&str, Value)>) -> Value {
        let entries: IndexMap<String, Value> = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Value::new_mapping(entries, SourceInfo::default())
    }

    #[test]
    fn test_scalar_value() {
        let value = scalar("test");
        assert!(value.is_scalar());
        assert!(!value.is_sequence());
        assert!(!value.is_mapping());
        assert_eq!(value.kind(), Kind::Scalar);
        assert_eq!(value.as_yaml().and_then(Yaml::as_str), Some("test"));
    }

    #[test]
    fn test_mapping_value() {
        let value = mapping(vec![("key", scalar("v"))]);
        assert!(value.is_mapping());
        assert_eq!(value.kind(), Kind::Mapping);
        assert_eq!(
            value.get("key").and_then(Value::as_yaml).and_then(Yaml::as_str),
            Some("v")
        );
        assert!(value.get("missing").is_none());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Scalar.to_string(), "scalar");
        assert_eq!(Kind::Sequence.to_string(), "sequence");
        assert_eq!(Kind::Mapping.to_string(), "mapping");
    }

    #[test]
    fn test_to_yaml_keeps_order() {
        let value = mapping(vec![
            ("z", scalar("1")),
            ("a", scalar("2")),
        ]);
        let yaml = value.to_yaml();
        let Yaml::Hash(hash) = yaml else {
            panic!("expected hash");
        };
        let keys: Vec<&str> = hash.keys().map(|k| k.as_str().unwrap()).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_to_yaml_nested() {
        let value = mapping(vec![(
            "items",
            Value::new_sequence(
                vec![scalar("a"), scalar("b")],
                SourceInfo::default(),
            ),
        )]);
        let yaml = value.to_yaml();
        let items = &yaml["items"];
        assert_eq!(items.as_vec().map(Vec::len), Some(2));
    }
}
