// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::config::{Document, LoadOptions, NodeConfig, PortRef};
use crate::errors::GraphError;
use crate::graph::scheduler::{levels, topological_order};
use crate::graph::{find_cycle, Adjacency, EntryPoints};

/// One data edge: an output port feeding a node's input port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    pub source: &'a PortRef,
    pub target_node: &'a str,
    pub target_port: &'a str,
}

/// An immutable, validated task graph with its execution order.
///
/// Built only through the loader, so every instance is known to have unique
/// ids, resolvable references and no cycles. The execution order is computed
/// once at construction; re-loading the same document always yields the same
/// order.
///
/// ```
/// use taskgraph::config::load;
///
/// let graph = load(r#"
/// - id: report
///   type: Printer
///   inputs:
///     in: clean.out
/// - id: raw
///   type: CsvLoader
/// - id: clean
///   type: DropNaNode
///   inputs:
///     in: raw.out
/// "#).unwrap();
///
/// assert_eq!(graph.execution_order(), vec!["raw", "clean", "report"]);
/// assert_eq!(graph.dependencies_of("report"), vec!["clean"]);
/// ```
#[derive(Debug, Clone)]
pub struct TaskGraph {
    nodes: Vec<NodeConfig>,
    index: HashMap<String, usize>,
    adjacency: Adjacency,
    order: Vec<usize>,
    external_sources: Vec<String>,
}

impl TaskGraph {
    /// Builds the graph from a document that already passed validation.
    pub(crate) fn from_validated(
        document: Document,
        options: &LoadOptions,
    ) -> Result<Self, GraphError> {
        let nodes = document.nodes;

        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            index.entry(node.id.clone()).or_insert(position);
        }

        let adjacency = Adjacency::build(&nodes, |id| index.get(id).copied());

        let order = topological_order(&adjacency).map_err(|stuck| {
            let cycle: Vec<String> = match find_cycle(&adjacency) {
                Some(cycle) => cycle.into_iter().map(|i| nodes[i].id.clone()).collect(),
                None => stuck.into_iter().map(|i| nodes[i].id.clone()).collect(),
            };
            GraphError::Cycle {
                node_id: cycle.first().cloned().unwrap_or_default(),
                cycle,
            }
        })?;

        let external_sources = options
            .external_sources
            .iter()
            .filter(|id| !index.contains_key(id.as_str()))
            .cloned()
            .collect();

        Ok(Self {
            nodes,
            index,
            adjacency,
            order,
            external_sources,
        })
    }

    /// All nodes in declaration order.
    pub fn nodes(&self) -> &[NodeConfig] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&NodeConfig> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids such that every node follows all nodes it reads from; ties
    /// between independent nodes are broken by declaration order.
    pub fn execution_order(&self) -> Vec<&str> {
        self.order.iter().map(|&i| self.nodes[i].id.as_str()).collect()
    }

    /// Nodes in execution order.
    pub fn ordered_nodes(&self) -> impl Iterator<Item = &NodeConfig> {
        self.order.iter().map(move |&i| &self.nodes[i])
    }

    /// Topological levels. Every node's dependencies lie in earlier levels;
    /// nodes within a level keep declaration order.
    pub fn levels(&self) -> Vec<Vec<&str>> {
        levels(&self.adjacency, &self.order)
            .into_iter()
            .map(|level| level.into_iter().map(|i| self.nodes[i].id.as_str()).collect())
            .collect()
    }

    /// Topological levels as node records, for runners.
    pub fn level_nodes(&self) -> Vec<Vec<&NodeConfig>> {
        levels(&self.adjacency, &self.order)
            .into_iter()
            .map(|level| level.into_iter().map(|i| &self.nodes[i]).collect())
            .collect()
    }

    /// Declared nodes this node reads from, in input order.
    pub fn dependencies_of(&self, id: &str) -> Vec<&str> {
        self.neighbours(id, &self.adjacency.dependencies)
    }

    /// Declared nodes reading from this node, in declaration order.
    pub fn dependents_of(&self, id: &str) -> Vec<&str> {
        self.neighbours(id, &self.adjacency.dependents)
    }

    fn neighbours(&self, id: &str, lists: &[Vec<usize>]) -> Vec<&str> {
        self.index
            .get(id)
            .map(|&i| {
                lists[i]
                    .iter()
                    .map(|&n| self.nodes[n].id.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Nodes without in-graph dependencies, in declaration order.
    pub fn entry_points(&self) -> EntryPoints {
        self.nodes
            .iter()
            .zip(&self.adjacency.dependencies)
            .filter(|(_, deps)| deps.is_empty())
            .map(|(node, _)| node.id.clone())
            .collect::<Vec<_>>()
            .into()
    }

    /// The terminal collector node, if the document declares one.
    pub fn collector(&self) -> Option<&NodeConfig> {
        self.nodes.iter().find(|node| node.is_collector())
    }

    /// Every input binding as an edge, in declaration order. Edges from
    /// external sources are included.
    pub fn edges(&self) -> Vec<Edge<'_>> {
        self.nodes
            .iter()
            .flat_map(|node| {
                node.inputs.iter().map(move |binding| Edge {
                    source: &binding.source,
                    target_node: node.id.as_str(),
                    target_port: binding.port.as_str(),
                })
            })
            .collect()
    }

    /// External source ids referenced by this graph's load options.
    pub fn external_sources(&self) -> &[String] {
        &self.external_sources
    }

    pub fn is_external(&self, id: &str) -> bool {
        self.external_sources.iter().any(|source| source == id)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{load, load_with_options, LoadOptions};

    const DIAMOND: &str = r#"
- id: sink
  type: Join
  inputs:
    left: left.out
    right: right.out
- id: source
  type: Loader
- id: left
  type: Map
  inputs:
    in: source.out
- id: right
  type: Map
  inputs:
    in: source.out
"#;

    #[test]
    fn test_diamond_order_and_levels() {
        let graph = load(DIAMOND).unwrap();

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.execution_order(), vec!["source", "left", "right", "sink"]);
        assert_eq!(
            graph.levels(),
            vec![vec!["source"], vec!["left", "right"], vec!["sink"]]
        );
    }

    #[test]
    fn test_neighbours_and_entry_points() {
        let graph = load(DIAMOND).unwrap();

        assert_eq!(graph.dependencies_of("sink"), vec!["left", "right"]);
        assert_eq!(graph.dependents_of("source"), vec!["left", "right"]);
        assert!(graph.dependencies_of("missing").is_empty());
        assert_eq!(graph.entry_points().0, vec!["source".to_string()]);
        assert!(graph.collector().is_none());
    }

    #[test]
    fn test_edges_follow_declaration_order() {
        let graph = load(DIAMOND).unwrap();
        let edges = graph.edges();

        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0].target_node, "sink");
        assert_eq!(edges[0].target_port, "left");
        assert_eq!(edges[0].source.to_string(), "left.out");
    }

    #[test]
    fn test_external_sources_are_entry_points() {
        let yaml = r#"
- id: clean
  type: DropNaNode
  inputs:
    in: feed.rows
"#;
        let options = LoadOptions::default().with_external_source("feed");
        let graph = load_with_options(yaml, &options).unwrap();

        assert!(graph.is_external("feed"));
        assert!(!graph.contains("feed"));
        assert_eq!(graph.execution_order(), vec!["clean"]);
        assert!(graph.entry_points().contains("clean"));
    }

    #[test]
    fn test_ordered_nodes_match_execution_order() {
        let graph = load(DIAMOND).unwrap();
        let ids: Vec<&str> = graph.ordered_nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, graph.execution_order());
    }
}
