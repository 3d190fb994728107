//! Conversion from parsed YAML nodes to merge tree values.

use crate::error::ConfigError;
use crate::value::{Value, ValueKind};
use indexmap::IndexMap;
use yaml_rust2::Yaml;
use ymerge_yaml::{YamlNode, YamlNodeKind};

/// Convert a parsed [`YamlNode`] into a [`Value`] tree.
///
/// Mapping keys must be string scalars; anything else is rejected with the
/// key's source location. Duplicate keys within one mapping keep the later
/// entry (and the earlier entry's position).
///
/// # Errors
///
/// Returns [`ConfigError::NonStringKey`] when a mapping key is not a string.
pub fn value_from_yaml(node: YamlNode) -> Result<Value, ConfigError> {
    let source = node.source;

    match node.kind {
        YamlNodeKind::Scalar(yaml) => Ok(Value::new_scalar(yaml, source)),

        YamlNodeKind::Sequence(items) => {
            let items = items
                .into_iter()
                .map(value_from_yaml)
                .collect::<Result<Vec<Value>, ConfigError>>()?;
            Ok(Value::new_sequence(items, source))
        }

        YamlNodeKind::Mapping(entries) => {
            let mut converted = IndexMap::with_capacity(entries.len());
            for entry in entries {
                let Some(Yaml::String(key)) = entry.key.as_scalar().cloned() else {
                    return Err(ConfigError::NonStringKey {
                        found: render_key(&entry.key),
                        at: entry.key.source,
                    });
                };
                converted.insert(key, value_from_yaml(entry.value)?);
            }
            Ok(Value::new_mapping(converted, source))
        }
    }
}

/// Render an offending mapping key for an error message.
fn render_key(key: &YamlNode) -> String {
    match &key.kind {
        YamlNodeKind::Scalar(Yaml::Integer(i)) => i.to_string(),
        YamlNodeKind::Scalar(Yaml::Real(r)) => r.clone(),
        YamlNodeKind::Scalar(Yaml::Boolean(b)) => b.to_string(),
        YamlNodeKind::Scalar(Yaml::Null) => "null".to_string(),
        YamlNodeKind::Scalar(other) => format!("{other:?}"),
        YamlNodeKind::Sequence(_) => "<sequence>".to_string(),
        YamlNodeKind::Mapping(_) => "<mapping>".to_string(),
    }
}
