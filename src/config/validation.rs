//! Validation for task-graph integrity.
//!
//! Checks run in a fixed order so that error messages stay meaningful:
//!
//! 1. **Uniqueness**: every node id appears once (the empty collector id
//!    included, so a document holds at most one collector)
//! 2. **References**: every `inputs` value names a declared node or a
//!    configured external source
//! 3. **Acyclicity**: explicit-stack three-colour DFS over the data edges
//!
//! Cycle detection needs a structurally valid graph, so it is skipped when
//! either of the first two checks reports errors.
//!
//! # Examples
//!
//! ```rust
//! use taskgraph::config::{parse_document, validate_document, LoadOptions};
//! use taskgraph::errors::ValidationError;
//!
//! let doc = parse_document(r#"
//! - id: sort_node
//!   type: SortNode
//!   inputs:
//!     in: stock_dta.out
//! "#).unwrap();
//!
//! let errors = validate_document(&doc, &LoadOptions::default()).unwrap_err();
//! assert!(matches!(
//!     &errors[0],
//!     ValidationError::UnresolvedReference { missing_node, .. } if missing_node == "stock_dta"
//! ));
//! ```

use std::collections::{HashMap, HashSet};

use crate::config::{Document, LoadOptions};
use crate::errors::ValidationError;
use crate::graph::{find_cycle, Adjacency};
use crate::observability::messages::validation::{
    CyclicDependencyDetected, DuplicateNodeId, UnresolvedReference, ValidationStarted,
};
use crate::observability::messages::StructuredLog;

/// Validates a parsed document, collecting every error found.
///
/// # Returns
///
/// * `Ok(())` - the document describes a loadable DAG
/// * `Err(Vec<ValidationError>)` - all problems found, in check order
pub fn validate_document(
    document: &Document,
    options: &LoadOptions,
) -> Result<(), Vec<ValidationError>> {
    let start = ValidationStarted {
        node_count: document.len(),
    };
    let _entered = start.span("validate_document").entered();
    start.log();

    let mut errors = Vec::new();

    if let Err(duplicate_errors) = validate_unique_node_ids(document) {
        errors.extend(duplicate_errors);
    }

    if let Err(reference_errors) = validate_references(document, options) {
        errors.extend(reference_errors);
    }

    if errors.is_empty() {
        if let Err(cycle_error) = validate_acyclic_graph(document) {
            errors.push(cycle_error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Reports each id that was already declared earlier in the document.
fn validate_unique_node_ids(document: &Document) -> Result<(), Vec<ValidationError>> {
    let mut seen_ids = HashSet::new();
    let mut errors = Vec::new();

    for node in &document.nodes {
        if !seen_ids.insert(node.id.as_str()) {
            DuplicateNodeId { node_id: &node.id }.log();
            errors.push(ValidationError::DuplicateNodeId {
                node_id: node.id.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Reports every input binding whose producer is neither declared nor an
/// external source. Typical causes are typos (`stock_dta.out`) and nodes
/// removed without updating their consumers.
fn validate_references(
    document: &Document,
    options: &LoadOptions,
) -> Result<(), Vec<ValidationError>> {
    let node_ids: HashSet<&str> = document.nodes.iter().map(|n| n.id.as_str()).collect();
    let mut errors = Vec::new();

    for node in &document.nodes {
        for binding in &node.inputs {
            let producer = binding.source.node_id.as_str();
            if node_ids.contains(producer) || options.is_external(producer) {
                continue;
            }

            UnresolvedReference {
                node_id: &node.id,
                input_port: &binding.port,
                missing_node: producer,
                missing_port: &binding.source.port,
            }
            .log();
            errors.push(ValidationError::UnresolvedReference {
                node_id: node.id.clone(),
                input_port: binding.port.clone(),
                missing_node: producer.to_string(),
                missing_port: binding.source.port.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Rejects self-references and longer cycles, reporting the first cycle found
/// when walking roots in declaration order.
fn validate_acyclic_graph(document: &Document) -> Result<(), ValidationError> {
    let index: HashMap<&str, usize> = document
        .nodes
        .iter()
        .enumerate()
        .map(|(position, node)| (node.id.as_str(), position))
        .collect();
    let adjacency = Adjacency::build(&document.nodes, |id| index.get(id).copied());

    match find_cycle(&adjacency) {
        None => Ok(()),
        Some(path) => {
            let cycle: Vec<&str> = path
                .into_iter()
                .map(|i| document.nodes[i].id.as_str())
                .collect();
            CyclicDependencyDetected { cycle: &cycle }.log();
            Err(ValidationError::CyclicDependency {
                cycle: cycle.into_iter().map(str::to_string).collect(),
            })
        }
    }
}
