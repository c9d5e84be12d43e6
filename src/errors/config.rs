// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Findings of a single validation pass over a task-graph document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Two nodes share an id
    #[error("Duplicate node ID: '{node_id}'")]
    DuplicateNodeId { node_id: String },

    /// An `inputs` entry names a node that is not declared
    #[error(
        "Node '{node_id}' input '{input_port}' references '{missing_node}.{missing_port}', but node '{missing_node}' does not exist"
    )]
    UnresolvedReference {
        node_id: String,
        input_port: String,
        missing_node: String,
        missing_port: String,
    },

    /// A circular dependency, written in data-flow direction with the first
    /// member repeated at the end
    #[error("Cyclic dependency detected: {}", format_cycle(.cycle))]
    CyclicDependency { cycle: Vec<String> },
}

/// Errors that abort loading a task graph. No partial graph is ever returned.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Failed to read task graph '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed task graph: {message}")]
    Parse { message: String },

    #[error("Duplicate node ID: '{node_id}'")]
    DuplicateId { node_id: String },

    #[error(
        "Node '{node_id}' input '{input_port}' references '{missing_node}.{missing_port}', but node '{missing_node}' does not exist"
    )]
    Reference {
        node_id: String,
        input_port: String,
        missing_node: String,
        missing_port: String,
    },

    #[error("Cyclic dependency involving node '{node_id}': {}", format_cycle(.cycle))]
    Cycle { node_id: String, cycle: Vec<String> },
}

impl From<serde_yaml::Error> for GraphError {
    fn from(e: serde_yaml::Error) -> Self {
        GraphError::Parse {
            message: e.to_string(),
        }
    }
}

impl From<ValidationError> for GraphError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::DuplicateNodeId { node_id } => GraphError::DuplicateId { node_id },
            ValidationError::UnresolvedReference {
                node_id,
                input_port,
                missing_node,
                missing_port,
            } => GraphError::Reference {
                node_id,
                input_port,
                missing_node,
                missing_port,
            },
            ValidationError::CyclicDependency { cycle } => GraphError::Cycle {
                node_id: cycle.first().cloned().unwrap_or_default(),
                cycle,
            },
        }
    }
}

/// A malformed `node_id.port` reference.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid input reference '{reference}': {reason}")]
pub struct PortRefError {
    pub reference: String,
    pub reason: &'static str,
}

// The collector id is empty, so quote every member to keep it visible.
pub(crate) fn format_cycle<S: AsRef<str>>(cycle: &[S]) -> String {
    cycle
        .iter()
        .map(|id| format!("'{}'", id.as_ref()))
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_conversion_names_first_member() {
        let err: GraphError = ValidationError::CyclicDependency {
            cycle: vec!["b".into(), "c".into(), "b".into()],
        }
        .into();

        match &err {
            GraphError::Cycle { node_id, cycle } => {
                assert_eq!(node_id, "b");
                assert_eq!(cycle.len(), 3);
            }
            other => panic!("expected Cycle, got {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "Cyclic dependency involving node 'b': 'b' -> 'c' -> 'b'"
        );
    }

    #[test]
    fn test_reference_message_names_node_port_and_target() {
        let err: GraphError = ValidationError::UnresolvedReference {
            node_id: "sort_node".into(),
            input_port: "in".into(),
            missing_node: "stock_dta".into(),
            missing_port: "stock_out".into(),
        }
        .into();

        match &err {
            GraphError::Reference { missing_port, .. } => assert_eq!(missing_port, "stock_out"),
            other => panic!("expected Reference, got {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "Node 'sort_node' input 'in' references 'stock_dta.stock_out', \
             but node 'stock_dta' does not exist"
        );
    }

    #[test]
    fn test_format_cycle_keeps_collector_visible() {
        struct TestCase {
            name: &'static str,
            cycle: Vec<&'static str>,
            expected: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "self loop",
                cycle: vec!["a", "a"],
                expected: "'a' -> 'a'",
            },
            TestCase {
                name: "through collector",
                cycle: vec!["", "a", ""],
                expected: "'' -> 'a' -> ''",
            },
        ];

        for tc in test_cases {
            assert_eq!(format_cycle(&tc.cycle), tc.expected, "{}", tc.name);
        }
    }
}
