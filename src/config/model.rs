// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Schema of a task-graph document.
//!
//! A document is a YAML (or JSON) sequence of node records:
//!
//! ```yaml
//! - id: stock_data
//!   type: CsvStockLoader
//!   conf:
//!     file: data/stock_price_hist.csv.gz
//!   inputs: {}
//! - id: sort_node
//!   type: SortNode
//!   conf:
//!     keys: [asset, datetime]
//!   inputs:
//!     in: stock_data.stock_out
//! ```
//!
//! `conf` is passed through untouched; its shape belongs to the operation
//! selected by `type`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

use crate::config::consts::{COLLECTOR_ID, PORT_SEPARATOR};
use crate::errors::PortRefError;

/// Reference to a named output port of another node, written `node_id.port`.
///
/// The string is split at the last separator, so node ids may contain dots
/// while port names may not.
///
/// ```
/// use taskgraph::config::PortRef;
///
/// let r: PortRef = "sort_node.out".parse().unwrap();
/// assert_eq!(r.node_id, "sort_node");
/// assert_eq!(r.port, "out");
/// assert_eq!(r.to_string(), "sort_node.out");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortRef {
    pub node_id: String,
    pub port: String,
}

impl PortRef {
    pub fn new(node_id: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            port: port.into(),
        }
    }
}

impl FromStr for PortRef {
    type Err = PortRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (node_id, port) = s.rsplit_once(PORT_SEPARATOR).ok_or_else(|| PortRefError {
            reference: s.to_string(),
            reason: "expected `node_id.port`",
        })?;

        if port.is_empty() {
            return Err(PortRefError {
                reference: s.to_string(),
                reason: "port name is empty",
            });
        }

        Ok(Self::new(node_id, port))
    }
}

impl fmt::Display for PortRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.node_id, PORT_SEPARATOR, self.port)
    }
}

/// One `inputs` entry: a node's input port bound to another node's output port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBinding {
    pub port: String,
    pub source: PortRef,
}

/// A single declared processing step.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NodeConfig {
    #[serde(deserialize_with = "deserialize_text")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "deserialize_text")]
    pub type_tag: String,
    #[serde(default)]
    pub conf: serde_yaml::Value,
    /// Input bindings in document order.
    #[serde(default, deserialize_with = "deserialize_inputs")]
    pub inputs: Vec<InputBinding>,
}

impl NodeConfig {
    /// Whether this node carries the reserved collector id.
    pub fn is_collector(&self) -> bool {
        self.id == COLLECTOR_ID
    }

    /// Whether this node has no declared inputs.
    pub fn is_source(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// A parsed but not yet validated task-graph document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Document {
    pub nodes: Vec<NodeConfig>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Accepts only a YAML string. A bare `~`, `null` or number is rejected
/// instead of being read back as its literal text; `""` stays valid.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(text) => Ok(text),
        other => Err(D::Error::custom(format!("expected a string, got {:?}", other))),
    }
}

/// Accepts a mapping of port name to `node_id.port`. An absent key, `null`,
/// `{}` and `[]` all mean "no inputs".
fn deserialize_inputs<'de, D>(deserializer: D) -> Result<Vec<InputBinding>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_yaml::Value>::deserialize(deserializer)?;

    match raw {
        None | Some(serde_yaml::Value::Null) => Ok(Vec::new()),
        Some(serde_yaml::Value::Sequence(seq)) if seq.is_empty() => Ok(Vec::new()),
        Some(serde_yaml::Value::Mapping(mapping)) => mapping
            .into_iter()
            .map(|(key, value)| -> Result<InputBinding, D::Error> {
                let port = key.as_str().ok_or_else(|| {
                    D::Error::custom(format!("input port name must be a string, got {:?}", key))
                })?;
                let reference = value.as_str().ok_or_else(|| {
                    D::Error::custom(format!(
                        "input '{}' must be a `node_id.port` string, got {:?}",
                        port, value
                    ))
                })?;
                let source = reference.parse::<PortRef>().map_err(D::Error::custom)?;

                Ok(InputBinding {
                    port: port.to_string(),
                    source,
                })
            })
            .collect(),
        Some(other) => Err(D::Error::custom(format!(
            "`inputs` must be a mapping of port name to `node_id.port`, got {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_ref_parsing_table_driven() {
        struct TestCase {
            name: &'static str,
            input: &'static str,
            expected: Option<(&'static str, &'static str)>,
        }

        let test_cases = vec![
            TestCase {
                name: "simple reference",
                input: "stock_data.stock_out",
                expected: Some(("stock_data", "stock_out")),
            },
            TestCase {
                name: "dotted node id splits at last dot",
                input: "stage.1.out",
                expected: Some(("stage.1", "out")),
            },
            TestCase {
                name: "collector reference",
                input: ".out",
                expected: Some(("", "out")),
            },
            TestCase {
                name: "missing separator",
                input: "stock_data",
                expected: None,
            },
            TestCase {
                name: "empty port",
                input: "stock_data.",
                expected: None,
            },
        ];

        for tc in test_cases {
            let result = tc.input.parse::<PortRef>();
            match tc.expected {
                Some((node_id, port)) => {
                    let r = result.unwrap_or_else(|e| panic!("{}: unexpected error {}", tc.name, e));
                    assert_eq!(r.node_id, node_id, "{}", tc.name);
                    assert_eq!(r.port, port, "{}", tc.name);
                }
                None => assert!(result.is_err(), "{}: expected an error", tc.name),
            }
        }
    }

    #[test]
    fn test_parse_node_with_mapping_inputs_keeps_order() {
        let yaml = r#"
- id: join
  type: LeftMergeNode
  conf:
    column: asset
  inputs:
    right: stock_symbol.stock_name
    left: add_return_feature.stock_out
"#;
        let doc: Document = serde_yaml::from_str(yaml).unwrap();
        let node = &doc.nodes[0];

        assert_eq!(node.type_tag, "LeftMergeNode");
        assert_eq!(node.inputs.len(), 2);
        assert_eq!(node.inputs[0].port, "right");
        assert_eq!(node.inputs[0].source, PortRef::new("stock_symbol", "stock_name"));
        assert_eq!(node.inputs[1].port, "left");
    }

    #[test]
    fn test_empty_inputs_forms() {
        let yaml = r#"
- id: a
  type: Loader
- id: b
  type: Loader
  inputs: {}
- id: c
  type: Loader
  inputs: []
- id: d
  type: Loader
  inputs:
"#;
        let doc: Document = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(doc.len(), 4);
        assert!(doc.nodes.iter().all(NodeConfig::is_source));
        assert!(doc.nodes.iter().all(|n| n.conf.is_null()));
    }

    #[test]
    fn test_conf_passes_through_list_of_maps() {
        let yaml = r#"
- id: value_filter
  type: ValueFilterNode
  conf:
    - column: returns
      min: -10.0
    - column: returns
      max: 10.0
  inputs:
    in: add_indicator.out
"#;
        let doc: Document = serde_yaml::from_str(yaml).unwrap();
        let conf = doc.nodes[0].conf.as_sequence().unwrap();

        assert_eq!(conf.len(), 2);
        assert_eq!(conf[1]["max"].as_f64(), Some(10.0));
    }

    #[test]
    fn test_malformed_nodes_are_rejected() {
        let cases = [
            ("missing id", "- type: SortNode\n"),
            ("missing type", "- id: sort_node\n"),
            ("unknown field", "- id: a\n  type: T\n  input: {}\n"),
            ("non-string reference", "- id: a\n  type: T\n  inputs:\n    in: 42\n"),
            ("bad reference", "- id: a\n  type: T\n  inputs:\n    in: nodot\n"),
            ("inputs as scalar", "- id: a\n  type: T\n  inputs: b.out\n"),
            ("top level mapping", "id: a\ntype: T\n"),
            ("null id", "- id: ~\n  type: T\n"),
            ("null type", "- id: a\n  type: null\n"),
            ("numeric id", "- id: 42\n  type: T\n"),
        ];

        for (name, yaml) in cases {
            assert!(
                serde_yaml::from_str::<Document>(yaml).is_err(),
                "{} should fail to parse",
                name
            );
        }
    }

    #[test]
    fn test_quoted_ids_keep_their_text() {
        let yaml = "- id: \"~\"\n  type: \"null\"\n- id: \"\"\n  type: Output_Collector\n";
        let doc: Document = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(doc.nodes[0].id, "~");
        assert_eq!(doc.nodes[0].type_tag, "null");
        assert_eq!(doc.nodes[1].id, "");
    }

    #[test]
    fn test_collector_marker() {
        let yaml = "- id: \"\"\n  type: Output_Collector\n  inputs:\n    in1: drop_columns.out\n";
        let doc: Document = serde_yaml::from_str(yaml).unwrap();
        assert!(doc.nodes[0].is_collector());
        assert!(!doc.nodes[0].is_source());
    }
}
