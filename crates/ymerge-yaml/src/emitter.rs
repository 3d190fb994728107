//! Serialization of YAML trees back to text.

use crate::Result;
use yaml_rust2::{Yaml, YamlEmitter};

/// Render a `Yaml` tree as a YAML string.
///
/// The output carries no leading document marker and always ends with a
/// newline. Formatting is whatever the emitter produces; comments and the
/// styling of the original input are not preserved.
///
/// # Example
///
/// ```rust
/// use yaml_rust2::Yaml;
///
/// let mut hash = yaml_rust2::yaml::Hash::new();
/// hash.insert(Yaml::String("a".into()), Yaml::Integer(1));
/// let out = ymerge_yaml::emit(&Yaml::Hash(hash)).unwrap();
/// assert_eq!(out, "a: 1\n");
/// ```
///
/// # Errors
///
/// Returns an error if the emitter fails to format the tree.
pub fn emit(yaml: &Yaml) -> Result<String> {
    let mut out = String::new();
    let mut emitter = YamlEmitter::new(&mut out);
    emitter.dump(yaml)?;

    // The emitter prefixes every document with the `---` marker.
    let body = out.strip_prefix("---\n").unwrap_or(&out);
    let mut rendered = body.to_string();
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use yaml_rust2::yaml::Hash;

    fn hash(entries: Vec<(&str, Yaml)>) -> Yaml {
        let mut hash = Hash::new();
        for (key, value) in entries {
            hash.insert(Yaml::String(key.into()), value);
        }
        Yaml::Hash(hash)
    }

    #[test]
    fn test_emit_mapping() {
        let yaml = hash(vec![("a", Yaml::Integer(1)), ("b", Yaml::String("two".into()))]);
        let out = emit(&yaml).unwrap();
        assert_eq!(out, "a: 1\nb: two\n");
    }

    #[test]
    fn test_emit_preserves_key_order() {
        let yaml = hash(vec![
            ("zebra", Yaml::Integer(1)),
            ("apple", Yaml::Integer(2)),
            ("mango", Yaml::Integer(3)),
        ]);
        let out = emit(&yaml).unwrap();
        let keys: Vec<&str> = out
            .lines()
            .map(|line| line.split(':').next().unwrap())
            .collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_emit_round_trip() {
        let source = "name: demo\nitems:\n  - 1\n  - 2\nnested:\n  flag: true\n";
        let node = parse(source).unwrap();

        // Rebuild the raw Yaml via a fresh parse of the emitted text and
        // compare tree shapes.
        let yaml = yaml_rust2::YamlLoader::load_from_str(source).unwrap().remove(0);
        let emitted = emit(&yaml).unwrap();
        let reparsed = parse(&emitted).unwrap();
        assert_eq!(reparsed.len(), node.len());
        assert!(reparsed.get("nested").unwrap().is_mapping());
    }

    #[test]
    fn test_emit_ends_with_newline() {
        let out = emit(&hash(vec![("k", Yaml::Null)])).unwrap();
        assert!(out.ends_with('\n'));
        assert!(!out.starts_with("---"));
    }
}
