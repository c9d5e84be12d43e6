// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::{validate_document, Document};
use crate::errors::GraphError;
use crate::graph::TaskGraph;
use crate::observability::messages::loader::{
    DocumentParsed, GraphLoadFailed, GraphLoaded, ReadingDocument,
};
use crate::observability::messages::validation::ValidationFailed;
use crate::observability::messages::StructuredLog;

/// Options that change how a document is validated.
///
/// # Fields
/// * `external_sources` - node ids that are not declared in the document but
///   whose outputs the runtime feeds in. References to them are accepted and
///   they take no part in ordering.
///
/// # Example
/// ```yaml
/// external_sources:
///   - market_feed
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LoadOptions {
    #[serde(default)]
    pub external_sources: Vec<String>,
}

impl LoadOptions {
    pub fn with_external_source(mut self, id: impl Into<String>) -> Self {
        self.external_sources.push(id.into());
        self
    }

    pub fn is_external(&self, id: &str) -> bool {
        self.external_sources.iter().any(|source| source == id)
    }
}

/// Parse a task-graph document without semantic validation.
///
/// Fails with [`GraphError::Parse`] when the text is not a sequence of node
/// records: a missing, null or non-string `id` or `type`, an unknown field, a
/// malformed `node_id.port` reference or a non-sequence top-level value. An
/// empty document (blank or only comments) is rejected as well.
pub fn parse_document(source: &str) -> Result<Document, GraphError> {
    let value: serde_yaml::Value = serde_yaml::from_str(source)?;
    if value.is_null() {
        return Err(GraphError::Parse {
            message: "document is empty; expected a sequence of nodes".to_string(),
        });
    }
    let document: Document = serde_yaml::from_value(value)?;

    DocumentParsed {
        node_count: document.len(),
        edge_count: document.nodes.iter().map(|n| n.inputs.len()).sum(),
    }
    .log();

    Ok(document)
}

/// Load, validate and schedule a task graph with default options.
///
/// ```
/// use taskgraph::config::load;
/// use taskgraph::errors::GraphError;
///
/// let err = load(r#"
/// - id: a
///   type: SortNode
///   inputs:
///     in: a.out
/// "#).unwrap_err();
///
/// assert!(matches!(err, GraphError::Cycle { node_id, .. } if node_id == "a"));
/// ```
pub fn load(source: &str) -> Result<TaskGraph, GraphError> {
    load_with_options(source, &LoadOptions::default())
}

/// Load, validate and schedule a task graph.
///
/// No partial graph is returned: every validation error is logged and the
/// first one (duplicates, then references, then cycles) is returned.
pub fn load_with_options(source: &str, options: &LoadOptions) -> Result<TaskGraph, GraphError> {
    let result = parse_document(source).and_then(|document| build_graph(document, options));

    match result {
        Ok(graph) => {
            GraphLoaded {
                node_count: graph.len(),
                entry_point_count: graph.entry_points().len(),
                level_count: graph.levels().len(),
            }
            .log();
            Ok(graph)
        }
        Err(e) => {
            GraphLoadFailed { error: &e }.log();
            Err(e)
        }
    }
}

fn build_graph(document: Document, options: &LoadOptions) -> Result<TaskGraph, GraphError> {
    if let Err(errors) = validate_document(&document, options) {
        ValidationFailed {
            error_count: errors.len(),
        }
        .log();
        // validate_document only returns Err with at least one entry
        let first = errors.into_iter().next().ok_or_else(|| GraphError::Parse {
            message: "validation failed without reporting an error".to_string(),
        })?;
        return Err(first.into());
    }

    TaskGraph::from_validated(document, options)
}

/// Load a task graph from a single file with default options.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<TaskGraph, GraphError> {
    load_file_with_options(path, &LoadOptions::default())
}

/// Load a task graph from a single file.
pub fn load_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &LoadOptions,
) -> Result<TaskGraph, GraphError> {
    let path = path.as_ref();
    let reading = ReadingDocument { path };
    let _entered = reading.span("load_file").entered();
    reading.log();

    let content = fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_with_options(&content, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::span_recorder::SpanRecorder;
    use std::io::Write;

    #[test]
    fn parse_basic_document() {
        let yaml = r#"
- id: stock_data
  type: CsvStockLoader
  conf:
    file: data/stock_price_hist.csv.gz
  inputs: {}
- id: sort_node
  type: SortNode
  conf:
    keys: [asset, datetime]
  inputs:
    in: stock_data.stock_out
"#;

        let doc = parse_document(yaml).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.nodes[1].inputs[0].source.node_id, "stock_data");
        assert_eq!(doc.nodes[0].conf["file"].as_str(), Some("data/stock_price_hist.csv.gz"));
    }

    #[test]
    fn test_json_documents_are_accepted() {
        let json = r#"[
            {"id": "a", "type": "Loader", "conf": {}, "inputs": {}},
            {"id": "b", "type": "Sort", "inputs": {"in": "a.out"}}
        ]"#;

        let graph = load(json).unwrap();
        assert_eq!(graph.execution_order(), vec!["a", "b"]);
    }

    #[test]
    fn test_load_error_kinds_table_driven() {
        struct TestCase {
            name: &'static str,
            yaml: &'static str,
            check: fn(&GraphError) -> bool,
        }

        let test_cases = vec![
            TestCase {
                name: "missing type",
                yaml: "- id: a\n",
                check: |e| matches!(e, GraphError::Parse { .. }),
            },
            TestCase {
                name: "null id",
                yaml: "- id: ~\n  type: T\n",
                check: |e| matches!(e, GraphError::Parse { .. }),
            },
            TestCase {
                name: "null type",
                yaml: "- id: a\n  type: null\n",
                check: |e| matches!(e, GraphError::Parse { .. }),
            },
            TestCase {
                name: "empty document",
                yaml: "",
                check: |e| matches!(e, GraphError::Parse { message } if message.contains("empty")),
            },
            TestCase {
                name: "comments only",
                yaml: "  \n# nothing declared yet\n",
                check: |e| matches!(e, GraphError::Parse { message } if message.contains("empty")),
            },
            TestCase {
                name: "malformed reference",
                yaml: "- id: a\n  type: T\n  inputs:\n    in: nodot\n",
                check: |e| matches!(e, GraphError::Parse { .. }),
            },
            TestCase {
                name: "duplicate id",
                yaml: "- id: a\n  type: T\n- id: a\n  type: U\n",
                check: |e| matches!(e, GraphError::DuplicateId { node_id } if node_id == "a"),
            },
            TestCase {
                name: "dangling reference",
                yaml: "- id: a\n  type: T\n  inputs:\n    in: ghost.out\n",
                check: |e| {
                    matches!(e, GraphError::Reference { node_id, input_port, missing_node, missing_port }
                        if node_id == "a" && input_port == "in" && missing_node == "ghost"
                            && missing_port == "out")
                },
            },
            TestCase {
                name: "two node cycle",
                yaml: "- id: a\n  type: T\n  inputs:\n    in: b.out\n- id: b\n  type: T\n  inputs:\n    in: a.out\n",
                check: |e| {
                    matches!(e, GraphError::Cycle { node_id, cycle }
                        if cycle.contains(node_id) && (node_id == "a" || node_id == "b"))
                },
            },
        ];

        for tc in test_cases {
            let err = load(tc.yaml).expect_err(tc.name);
            assert!((tc.check)(&err), "{}: unexpected error {:?}", tc.name, err);
        }
    }

    #[test]
    fn test_duplicate_reported_before_reference() {
        let yaml = "- id: a\n  type: T\n  inputs:\n    in: ghost.out\n- id: a\n  type: T\n";
        assert!(matches!(load(yaml), Err(GraphError::DuplicateId { .. })));
    }

    #[test]
    fn test_load_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "- id: a\n  type: Loader\n- id: b\n  type: Sort\n  inputs:\n    in: a.out").unwrap();

        let graph = load_file(file.path()).unwrap();
        assert_eq!(graph.execution_order(), vec!["a", "b"]);
    }

    #[test]
    fn test_load_file_validates_inside_read_span() {
        let recorder = SpanRecorder::default();
        let _guard = recorder.install();

        load_file("configs/options-preprocessing.yaml").unwrap();

        let reads = recorder.named("read_document");
        assert_eq!(reads.len(), 1);
        assert_eq!(reads[0].parent, None);

        let validations = recorder.named("validation");
        assert_eq!(validations.len(), 1);
        assert_eq!(validations[0].parent.as_deref(), Some("read_document"));
    }

    #[test]
    fn test_load_file_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");

        match load_file(&missing) {
            Err(GraphError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_options_from_yaml() {
        let options: LoadOptions = serde_yaml::from_str("external_sources: [feed]\n").unwrap();
        assert!(options.is_external("feed"));
        assert!(!options.is_external("other"));
        assert_eq!(LoadOptions::default().external_sources.len(), 0);
    }
}
