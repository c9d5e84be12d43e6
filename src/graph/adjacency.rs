// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::NodeConfig;

/// Index-based adjacency over declared nodes.
///
/// `dependencies[i]` lists the producers node `i` reads from, in input order;
/// `dependents[i]` lists the consumers of node `i`, in declaration order. Both
/// are de-duplicated, so two inputs bound to the same producer form one edge.
/// References that do not resolve to a declared node are skipped.
#[derive(Debug, Clone, Default)]
pub(crate) struct Adjacency {
    pub(crate) dependencies: Vec<Vec<usize>>,
    pub(crate) dependents: Vec<Vec<usize>>,
}

impl Adjacency {
    pub(crate) fn build<F>(nodes: &[NodeConfig], lookup: F) -> Self
    where
        F: Fn(&str) -> Option<usize>,
    {
        let dependencies: Vec<Vec<usize>> = nodes
            .iter()
            .map(|node| {
                let mut deps = Vec::new();
                for binding in &node.inputs {
                    if let Some(producer) = lookup(&binding.source.node_id) {
                        if !deps.contains(&producer) {
                            deps.push(producer);
                        }
                    }
                }
                deps
            })
            .collect();

        let mut dependents = vec![Vec::new(); nodes.len()];
        for (consumer, deps) in dependencies.iter().enumerate() {
            for &producer in deps {
                dependents[producer].push(consumer);
            }
        }

        Self {
            dependencies,
            dependents,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.dependencies.len()
    }
}
