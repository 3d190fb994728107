//! Pairwise deep merge and the left-to-right document fold.

use crate::error::ConfigError;
use crate::value::{Value, ValueKind};
use indexmap::IndexMap;

/// Deep-merge two document trees, `overlay` taking precedence.
///
/// - A scalar overlay replaces whatever the base holds at that path, and a
///   composite overlay replaces a scalar base.
/// - Two sequences concatenate, base items first.
/// - Two mappings merge field-wise over the union of their keys; the key
///   order is the base's keys in base order, then keys only the overlay has,
///   in overlay order.
/// - A sequence and a mapping at the same path fail the whole merge with
///   [`ConfigError::KindMismatch`]; the engine never guesses a side.
///
/// The result is a freshly built tree: neither input is mutated or aliased,
/// so callers may keep using both after the merge.
///
/// # Errors
///
/// Returns [`ConfigError::KindMismatch`] when a sequence and a mapping meet
/// at the same path.
pub fn merge(base: &Value, overlay: &Value) -> Result<Value, ConfigError> {
    let mut path = Vec::new();
    merge_values(base, overlay, &mut path)
}

/// Fold an ordered list of documents into one, later documents overriding
/// earlier ones.
///
/// Every document root must be a mapping; roots are validated before any
/// merging happens. The fold is strictly sequential, document order is the
/// override precedence, and the operation either produces a complete result
/// or fails without one.
///
/// # Errors
///
/// Returns [`ConfigError::TooFewDocuments`] for fewer than two inputs,
/// [`ConfigError::InvalidRoot`] when a root is not a mapping, and any error
/// of [`merge`].
pub fn merge_all(documents: &[Value]) -> Result<Value, ConfigError> {
    if documents.len() < 2 {
        return Err(ConfigError::TooFewDocuments(documents.len()));
    }

    for document in documents {
        if !document.is_mapping() {
            return Err(ConfigError::InvalidRoot {
                kind: document.kind(),
                at: document.source.clone(),
            });
        }
    }

    let mut result = documents[0].clone();
    for overlay in &documents[1..] {
        result = merge(&result, overlay)?;
    }
    Ok(result)
}

/// Recursive descent over both trees at the same path.
///
/// Absent keys never reach this function: the mapping arm resolves each side
/// with `get`, and a key missing on one side is filled from the other before
/// recursing.
fn merge_values(
    base: &Value,
    overlay: &Value,
    path: &mut Vec<String>,
) -> Result<Value, ConfigError> {
    match (&base.kind, &overlay.kind) {
        // Scalars never merge; the overlay wins, even over a composite base.
        (_, ValueKind::Scalar(_)) => Ok(overlay.clone()),

        // A composite overlay replaces a scalar base outright.
        (ValueKind::Scalar(_), _) => Ok(overlay.clone()),

        (ValueKind::Sequence(base_items), ValueKind::Sequence(overlay_items)) => {
            let mut items = Vec::with_capacity(base_items.len() + overlay_items.len());
            items.extend(base_items.iter().cloned());
            items.extend(overlay_items.iter().cloned());
            Ok(Value::new_sequence(items, overlay.source.clone()))
        }

        (ValueKind::Mapping(base_entries), ValueKind::Mapping(overlay_entries)) => {
            let mut merged =
                IndexMap::with_capacity(base_entries.len() + overlay_entries.len());

            // Base keys first, in base order, each merged against the
            // overlay side (or kept as-is when the overlay lacks the key).
            for (key, base_value) in base_entries {
                let value = match overlay_entries.get(key) {
                    Some(overlay_value) => {
                        path.push(key.clone());
                        let value = merge_values(base_value, overlay_value, path)?;
                        path.pop();
                        value
                    }
                    None => base_value.clone(),
                };
                merged.insert(key.clone(), value);
            }

            // Then keys only the overlay has, in overlay order.
            for (key, overlay_value) in overlay_entries {
                if !base_entries.contains_key(key) {
                    merged.insert(key.clone(), overlay_value.clone());
                }
            }

            Ok(Value::new_mapping(merged, overlay.source.clone()))
        }

        _ => Err(ConfigError::KindMismatch {
            path: path.clone(),
            base_kind: base.kind(),
            overlay_kind: overlay.kind(),
            base: base.source.clone(),
            overlay: overlay.source.clone(),
        }),
    }
}
