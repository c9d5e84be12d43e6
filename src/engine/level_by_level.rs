// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{Instrument, Span};

use crate::config::{NodeConfig, RunnerOptions};
use crate::engine::node::{log_run_outcome, resolve_inputs, run_node};
use crate::engine::RunResults;
use crate::errors::{ExecutionError, RegistryError};
use crate::graph::TaskGraph;
use crate::observability::messages::engine::{LevelStarted, RunStarted};
use crate::observability::messages::StructuredLog;
use crate::operations::OperationRegistry;
use crate::traits::{GraphRunner, PortValues, SourceValues};

type NodeTask = JoinHandle<Result<(String, PortValues), ExecutionError>>;

/// Runs the graph one topological level at a time.
///
/// All nodes of a level run concurrently, bounded by a semaphore of
/// `max_concurrency` permits; the next level starts only when the whole
/// level has finished. Every node's inputs come from earlier levels, so they
/// are resolved before its task is spawned.
///
/// Within a level, results are collected in declaration order regardless of
/// which task finishes first, so repeated runs record identical results.
///
/// On the first failure the remaining tasks of the level are aborted and the
/// error is returned.
#[derive(Debug, Clone)]
pub struct LevelByLevelRunner {
    max_concurrency: usize,
}

impl LevelByLevelRunner {
    pub fn new(max_concurrency: usize) -> Self {
        Self {
            max_concurrency: max_concurrency.max(1),
        }
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    async fn run_levels(
        &self,
        graph: &TaskGraph,
        registry: &OperationRegistry,
        sources: &SourceValues,
    ) -> Result<RunResults, ExecutionError> {
        registry.ensure_covers(graph)?;

        let levels = graph.level_nodes();
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut results = RunResults::default();

        for (level_index, level) in levels.iter().enumerate() {
            let start = LevelStarted {
                level: level_index,
                level_count: levels.len(),
                node_count: level.len(),
            };
            let span = start.span("run_level");
            span.in_scope(|| start.log());

            self.run_level(level, registry, sources, &semaphore, &mut results)
                .instrument(span)
                .await?;
        }

        Ok(results)
    }

    /// Spawn every node of one level and record the outcomes in declaration
    /// order.
    async fn run_level(
        &self,
        level: &[&NodeConfig],
        registry: &OperationRegistry,
        sources: &SourceValues,
        semaphore: &Arc<Semaphore>,
        results: &mut RunResults,
    ) -> Result<(), ExecutionError> {
        let mut tasks: Vec<(String, NodeTask)> = Vec::with_capacity(level.len());

        for &node in level {
            let operation = registry
                .get(&node.type_tag)
                .cloned()
                .ok_or_else(|| RegistryError::UnknownType {
                    node_id: node.id.clone(),
                    type_tag: node.type_tag.clone(),
                })?;
            let inputs = resolve_inputs(node, results.produced(), sources)?;

            let node_id = node.id.clone();
            let node = node.clone();
            let semaphore_clone = semaphore.clone();

            let task = tokio::spawn(
                async move {
                    let _permit = semaphore_clone.acquire_owned().await.map_err(|e| {
                        ExecutionError::TaskJoin {
                            node_id: node.id.clone(),
                            reason: format!("failed to acquire semaphore permit: {}", e),
                        }
                    })?;

                    let outputs = run_node(&node, operation.as_ref(), inputs).await?;
                    Ok((node.id, outputs))
                }
                .instrument(Span::current()),
            );

            tasks.push((node_id, task));
        }

        let mut pending = tasks.into_iter();
        while let Some((node_id, task)) = pending.next() {
            let outcome = match task.await {
                Ok(outcome) => outcome,
                Err(join_error) => Err(ExecutionError::TaskJoin {
                    node_id,
                    reason: join_error.to_string(),
                }),
            };

            match outcome {
                Ok((id, outputs)) => results.record(id, outputs),
                Err(e) => {
                    for (_, rest) in pending {
                        rest.abort();
                    }
                    return Err(e);
                }
            }
        }

        Ok(())
    }
}

impl Default for LevelByLevelRunner {
    /// One permit per available core.
    fn default() -> Self {
        Self::new(RunnerOptions::default().max_concurrency())
    }
}

#[async_trait]
impl GraphRunner for LevelByLevelRunner {
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
            max_concurrency: self.max_concurrency,
        };
        let span = start.span("level_by_level_run");
        span.in_scope(|| start.log());

        let result = self
            .run_levels(graph, registry, &sources)
            .instrument(span.clone())
            .await;
        span.in_scope(|| log_run_outcome(self.name(), graph.len(), started, result))
    }

    fn name(&self) -> &'static str {
        "LevelByLevel"
    }
}
