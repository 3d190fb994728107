//! Event-driven YAML parser that builds [`YamlNode`] trees.

use crate::{Error, MappingEntry, Result, SourceInfo, YamlNode};
use std::collections::HashMap;
use yaml_rust2::Yaml;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Parse YAML from a string, producing a [`YamlNode`] tree.
///
/// This parses a single YAML document. If the input contains multiple
/// documents, only the first one is parsed.
///
/// # Example
///
/// ```rust
/// use ymerge_yaml::parse;
///
/// let node = parse("title: My Document").unwrap();
/// assert!(node.is_mapping());
/// ```
///
/// # Errors
///
/// Returns an error if the YAML is invalid or the input holds no document.
pub fn parse(content: &str) -> Result<YamlNode> {
    parse_impl(content, None)
}

/// Parse YAML from a string with an associated filename.
///
/// The filename is carried on every node's [`SourceInfo`], so downstream
/// errors can name the offending file.
///
/// # Example
///
/// ```rust
/// use ymerge_yaml::parse_file;
///
/// let node = parse_file("title: My Document", "config.yaml").unwrap();
/// assert_eq!(node.source.file, Some("config.yaml".into()));
/// ```
///
/// # Errors
///
/// Returns an error if the YAML is invalid or the input holds no document.
pub fn parse_file(content: &str, filename: &str) -> Result<YamlNode> {
    parse_impl(content, Some(filename))
}

fn parse_impl(content: &str, filename: Option<&str>) -> Result<YamlNode> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = TreeBuilder::new(filename);

    // false = single document only
    parser.load(&mut builder, false).map_err(Error::from)?;

    builder.result()
}

/// Builder that implements `MarkedEventReceiver` to construct a `YamlNode`.
struct TreeBuilder {
    /// Optional filename stamped onto every SourceInfo
    filename: Option<String>,

    /// Stack of composite nodes being constructed
    stack: Vec<BuildFrame>,

    /// Anchored nodes, by anchor id, for alias resolution
    anchors: HashMap<usize, YamlNode>,

    /// The completed root node
    root: Option<YamlNode>,

    /// First input error observed mid-stream
    error: Option<Error>,
}

/// A composite node being constructed during parsing.
enum BuildFrame {
    Sequence {
        start: Marker,
        anchor: usize,
        items: Vec<YamlNode>,
    },

    Mapping {
        start: Marker,
        anchor: usize,
        // value is None while waiting for the key's value event
        entries: Vec<(YamlNode, Option<YamlNode>)>,
    },
}

impl TreeBuilder {
    fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(|s| s.to_string()),
            stack: Vec::new(),
            anchors: HashMap::new(),
            root: None,
            error: None,
        }
    }

    fn result(self) -> Result<YamlNode> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.root.ok_or(Error::EmptyStream)
    }

    /// Record a finished node: register its anchor, then attach it to the
    /// enclosing composite (or make it the root).
    fn finish(&mut self, node: YamlNode, anchor: usize) {
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }

        let Some(frame) = self.stack.last_mut() else {
            if self.root.is_none() {
                self.root = Some(node);
            }
            return;
        };

        match frame {
            BuildFrame::Sequence { items, .. } => {
                items.push(node);
            }
            BuildFrame::Mapping { entries, .. } => {
                if let Some((_, value)) = entries.last_mut() {
                    if value.is_none() {
                        *value = Some(node);
                    } else {
                        // value already filled, this node is a new key
                        entries.push((node, None));
                    }
                } else {
                    // first key
                    entries.push((node, None));
                }
            }
        }
    }

    fn make_source_info(&self, marker: &Marker, len: usize) -> SourceInfo {
        let mut info = SourceInfo::from_marker(marker, len);
        if let Some(ref filename) = self.filename {
            info = info.with_file(filename.clone());
        }
        info
    }

    fn make_span_info(&self, start: &Marker, end: &Marker) -> SourceInfo {
        let mut info = SourceInfo::from_span(start, end);
        if let Some(ref filename) = self.filename {
            info = info.with_file(filename.clone());
        }
        info
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        if self.error.is_some() {
            return;
        }

        match ev {
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}

            Event::Scalar(value, style, anchor, _tag) => {
                let source = self.make_source_info(&marker, value.len());
                let yaml = scalar_from_event(&value, style);
                self.finish(YamlNode::scalar(yaml, source), anchor);
            }

            Event::SequenceStart(anchor, _tag) => {
                self.stack.push(BuildFrame::Sequence {
                    start: marker,
                    anchor,
                    items: Vec::new(),
                });
            }

            Event::SequenceEnd => {
                let frame = self.stack.pop().expect("SequenceEnd without SequenceStart");
                let BuildFrame::Sequence {
                    start,
                    anchor,
                    items,
                } = frame
                else {
                    panic!("expected sequence build frame");
                };

                let source = self.make_span_info(&start, &marker);
                self.finish(YamlNode::sequence(items, source), anchor);
            }

            Event::MappingStart(anchor, _tag) => {
                self.stack.push(BuildFrame::Mapping {
                    start: marker,
                    anchor,
                    entries: Vec::new(),
                });
            }

            Event::MappingEnd => {
                let frame = self.stack.pop().expect("MappingEnd without MappingStart");
                let BuildFrame::Mapping {
                    start,
                    anchor,
                    entries,
                } = frame
                else {
                    panic!("expected mapping build frame");
                };

                let entries = entries
                    .into_iter()
                    .map(|(key, value)| MappingEntry {
                        key,
                        value: value.expect("mapping entry without value"),
                    })
                    .collect();

                let source = self.make_span_info(&start, &marker);
                self.finish(YamlNode::mapping(entries, source), anchor);
            }

            Event::Alias(anchor) => {
                // Resolve against previously anchored nodes, the way the
                // yaml-rust2 loader does. The resolved node keeps the
                // anchor definition's source location.
                match self.anchors.get(&anchor) {
                    Some(node) => {
                        let node = node.clone();
                        self.finish(node, 0);
                    }
                    None => {
                        self.error = Some(Error::UnknownAlias {
                            location: self.make_source_info(&marker, 0),
                        });
                    }
                }
            }
        }
    }
}

/// Classify a scalar event into the appropriate `Yaml` value.
///
/// Plain scalars get YAML 1.1 type inference (integers, floats, booleans,
/// null). Quoted and block scalars are always strings.
fn scalar_from_event(value: &str, style: TScalarStyle) -> Yaml {
    if style != TScalarStyle::Plain {
        return Yaml::String(value.to_string());
    }

    if let Ok(i) = value.parse::<i64>() {
        return Yaml::Integer(i);
    }

    // Reals keep their source spelling
    if value.parse::<f64>().is_ok() {
        return Yaml::Real(value.to_string());
    }

    match value {
        "true" | "True" | "TRUE" | "yes" | "Yes" | "YES" | "on" | "On" | "ON" => {
            Yaml::Boolean(true)
        }
        "false" | "False" | "FALSE" | "no" | "No" | "NO" | "off" | "Off" | "OFF" => {
            Yaml::Boolean(false)
        }
        "null" | "Null" | "NULL" | "~" | "" => Yaml::Null,
        _ => Yaml::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar() {
        let node = parse("hello").unwrap();
        assert!(node.is_scalar());
        assert_eq!(node.as_scalar().and_then(Yaml::as_str), Some("hello"));
    }

    #[test]
    fn test_parse_integer() {
        let node = parse("42").unwrap();
        assert_eq!(node.as_scalar().and_then(Yaml::as_i64), Some(42));
    }

    #[test]
    fn test_parse_boolean() {
        let node = parse("true").unwrap();
        assert_eq!(node.as_scalar().and_then(Yaml::as_bool), Some(true));
    }

    #[test]
    fn test_parse_null() {
        let node = parse("~").unwrap();
        assert_eq!(node.as_scalar(), Some(&Yaml::Null));
    }

    #[test]
    fn test_quoted_scalar_stays_string() {
        let node = parse(r#"port: "8080""#).unwrap();
        let port = node.get("port").unwrap();
        assert_eq!(port.as_scalar().and_then(Yaml::as_str), Some("8080"));
    }

    #[test]
    fn test_parse_sequence() {
        let node = parse("[1, 2, 3]").unwrap();
        assert!(node.is_sequence());
        assert_eq!(node.len(), 3);

        let items = node.as_sequence().unwrap();
        assert_eq!(items[0].as_scalar().and_then(Yaml::as_i64), Some(1));
        assert_eq!(items[2].as_scalar().and_then(Yaml::as_i64), Some(3));
    }

    #[test]
    fn test_parse_mapping() {
        let node = parse("title: My Document\nauthor: John Doe").unwrap();
        assert!(node.is_mapping());
        assert_eq!(node.len(), 2);

        let title = node.get("title").unwrap();
        assert_eq!(title.as_scalar().and_then(Yaml::as_str), Some("My Document"));
    }

    #[test]
    fn test_nested_structure() {
        let node = parse(
            r#"
project:
  title: My Project
  authors:
    - Alice
    - Bob
"#,
        )
        .unwrap();

        let project = node.get("project").unwrap();
        assert!(project.is_mapping());

        let authors = project.get("authors").unwrap();
        assert!(authors.is_sequence());
        assert_eq!(authors.len(), 2);
    }

    #[test]
    fn test_source_tracking() {
        let node = parse_file("title: My Document", "doc.yaml").unwrap();
        assert_eq!(node.source.file, Some("doc.yaml".into()));

        let title = node.get("title").unwrap();
        assert_eq!(title.source.file, Some("doc.yaml".into()));
        assert_eq!(title.source.line, 1);
        assert!(title.source.col > 1);
    }

    #[test]
    fn test_second_line_location() {
        let node = parse_file("a: 1\nb: 2", "doc.yaml").unwrap();
        let b = node.get("b").unwrap();
        assert_eq!(b.source.line, 2);
    }

    #[test]
    fn test_alias_resolution() {
        let node = parse(
            r#"
defaults: &defaults
  retries: 3
service:
  settings: *defaults
"#,
        )
        .unwrap();

        let settings = node.get("service").unwrap().get("settings").unwrap();
        assert!(settings.is_mapping());
        assert_eq!(
            settings.get("retries").and_then(YamlNode::as_scalar).and_then(Yaml::as_i64),
            Some(3)
        );
    }

    #[test]
    fn test_undefined_alias_is_error() {
        // The underlying parser rejects aliases to anchors it never saw.
        let err = parse("value: *missing").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_self_referential_alias_is_error() {
        // The anchored node is still under construction when the alias
        // tries to resolve it.
        let err = parse("a: &cycle\n  b: *cycle").unwrap_err();
        assert!(matches!(err, Error::UnknownAlias { .. }));
    }

    #[test]
    fn test_empty_input_is_error() {
        assert_eq!(parse("").unwrap_err(), Error::EmptyStream);
    }

    #[test]
    fn test_syntax_error() {
        let err = parse("a: [1, 2").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_first_document_only() {
        let node = parse("a: 1\n---\nb: 2").unwrap();
        assert!(node.get("a").is_some());
        assert!(node.get("b").is_none());
    }
}
