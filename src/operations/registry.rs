// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::RegistryError;
use crate::graph::TaskGraph;
use crate::operations::{
    CollectorOperation, PassThroughOperation, COLLECTOR_TYPE, PASS_THROUGH_TYPE,
};
use crate::traits::Operation;

/// Maps node type tags to their operation implementations.
///
/// Operations are stored as `Arc<dyn Operation>` so concurrent runners can
/// share one instance across tasks without cloning the operation itself.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use taskgraph::operations::{OperationRegistry, PassThroughOperation};
///
/// let mut registry = OperationRegistry::new();
/// registry.register("SortNode", Arc::new(PassThroughOperation));
///
/// assert!(registry.contains("SortNode"));
/// assert_eq!(registry.get("SortNode").map(|op| op.name()), Some("pass_through"));
/// ```
#[derive(Clone, Default)]
pub struct OperationRegistry(HashMap<String, Arc<dyn Operation>>);

impl OperationRegistry {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// A registry holding the structural built-ins (`PassThrough`,
    /// `Output_Collector`).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(PASS_THROUGH_TYPE, Arc::new(PassThroughOperation));
        registry.register(COLLECTOR_TYPE, Arc::new(CollectorOperation));
        registry
    }

    /// Register an operation under a type tag, replacing any previous one.
    pub fn register(&mut self, type_tag: impl Into<String>, operation: Arc<dyn Operation>) {
        self.0.insert(type_tag.into(), operation);
    }

    pub fn get(&self, type_tag: &str) -> Option<&Arc<dyn Operation>> {
        self.0.get(type_tag)
    }

    pub fn contains(&self, type_tag: &str) -> bool {
        self.0.contains_key(type_tag)
    }

    /// Registered type tags, sorted.
    pub fn type_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.0.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks that every node's type tag resolves, reporting the first node
    /// in declaration order that does not.
    pub fn ensure_covers(&self, graph: &TaskGraph) -> Result<(), RegistryError> {
        match graph.nodes().iter().find(|node| !self.contains(&node.type_tag)) {
            Some(node) => Err(RegistryError::UnknownType {
                node_id: node.id.clone(),
                type_tag: node.type_tag.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("operation_count", &self.0.len())
            .field("type_tags", &self.type_tags())
            .finish()
    }
}

impl From<HashMap<String, Arc<dyn Operation>>> for OperationRegistry {
    fn from(map: HashMap<String, Arc<dyn Operation>>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load;

    #[test]
    fn test_with_builtins() {
        let registry = OperationRegistry::with_builtins();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.type_tags(), vec![COLLECTOR_TYPE, PASS_THROUGH_TYPE]);
        assert_eq!(registry.get(COLLECTOR_TYPE).map(|op| op.name()), Some("collector"));
    }

    #[test]
    fn test_ensure_covers_table_driven() {
        struct TestCase {
            name: &'static str,
            yaml: &'static str,
            expected: Result<(), RegistryError>,
        }

        let test_cases = vec![
            TestCase {
                name: "empty graph",
                yaml: "[]",
                expected: Ok(()),
            },
            TestCase {
                name: "all types registered",
                yaml: "- id: a\n  type: PassThrough\n- id: \"\"\n  type: Output_Collector\n  inputs:\n    in: a.out\n",
                expected: Ok(()),
            },
            TestCase {
                name: "first unknown type in declaration order",
                yaml: "- id: z\n  type: SortNode\n- id: a\n  type: JoinNode\n",
                expected: Err(RegistryError::UnknownType {
                    node_id: "z".to_string(),
                    type_tag: "SortNode".to_string(),
                }),
            },
        ];

        let registry = OperationRegistry::with_builtins();
        for tc in test_cases {
            let graph = load(tc.yaml).unwrap();
            assert_eq!(registry.ensure_covers(&graph), tc.expected, "{}", tc.name);
        }
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = OperationRegistry::with_builtins();
        registry.register(PASS_THROUGH_TYPE, Arc::new(CollectorOperation));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(PASS_THROUGH_TYPE).map(|op| op.name()), Some("collector"));
    }
}
