// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::time::Instant;
use tracing::Instrument;

use crate::engine::node::{log_run_outcome, resolve_inputs, run_node};
use crate::engine::RunResults;
use crate::errors::{ExecutionError, RegistryError};
use crate::graph::TaskGraph;
use crate::observability::messages::engine::RunStarted;
use crate::observability::messages::StructuredLog;
use crate::operations::OperationRegistry;
use crate::traits::{GraphRunner, SourceValues};

/// Runs nodes one at a time in the graph's execution order.
///
/// The reference runner: its completion order is exactly
/// [`TaskGraph::execution_order`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialRunner;

impl SequentialRunner {
    pub fn new() -> Self {
        Self
    }

    async fn run_nodes(
        &self,
        graph: &TaskGraph,
        registry: &OperationRegistry,
        sources: &SourceValues,
    ) -> Result<RunResults, ExecutionError> {
        registry.ensure_covers(graph)?;

        let mut results = RunResults::default();
        for node in graph.ordered_nodes() {
            let operation = registry
                .get(&node.type_tag)
                .ok_or_else(|| RegistryError::UnknownType {
                    node_id: node.id.clone(),
                    type_tag: node.type_tag.clone(),
                })?;

            let inputs = resolve_inputs(node, results.produced(), sources)?;
            let outputs = run_node(node, operation.as_ref(), inputs).await?;
            results.record(node.id.clone(), outputs);
        }

        Ok(results)
    }
}

#[async_trait]
impl GraphRunner for SequentialRunner {
    async fn run(
        &self,
        graph: &TaskGraph,
        registry: &OperationRegistry,
        sources: SourceValues,
    ) -> Result<RunResults, ExecutionError> {
        let started = Instant::now();
        let start = RunStarted {
            runner: self.name(),
            node_count: graph.len(),
            max_concurrency: 1,
        };
        let span = start.span("sequential_run");
        span.in_scope(|| start.log());

        let result = self
            .run_nodes(graph, registry, &sources)
            .instrument(span.clone())
            .await;
        span.in_scope(|| log_run_outcome(self.name(), graph.len(), started, result))
    }

    fn name(&self) -> &'static str {
        "Sequential"
    }
}
