// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for runner lifecycle and node execution events.
//!
//! This module contains message types for logging events related to:
//! * Run start, completion and failure
//! * Level progress for the level-by-level runner
//! * Individual node execution

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Run started with the given runner.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use taskgraph::observability::messages::engine::RunStarted;
///
/// let msg = RunStarted {
///     runner: "LevelByLevel",
///     node_count: 12,
///     max_concurrency: 4,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RunStarted<'a> {
    pub runner: &'a str,
    pub node_count: usize,
    pub max_concurrency: usize,
}

impl Display for RunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting task graph run with {} runner: {} nodes, max_concurrency={}",
            self.runner, self.node_count, self.max_concurrency
        )
    }
}

impl StructuredLog for RunStarted<'_> {
    fn log(&self) {
        tracing::info!(
            runner = self.runner,
            node_count = self.node_count,
            max_concurrency = self.max_concurrency,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "run",
            span_name = name,
            runner = self.runner,
            node_count = self.node_count,
            max_concurrency = self.max_concurrency,
        )
    }
}

/// Run completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RunCompleted<'a> {
    pub runner: &'a str,
    pub node_count: usize,
    pub duration: Duration,
}

impl Display for RunCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Task graph run completed with {} runner: {} nodes in {:?}",
            self.runner, self.node_count, self.duration
        )
    }
}

impl StructuredLog for RunCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            runner = self.runner,
            node_count = self.node_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }
}

/// Run aborted.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct RunFailed<'a> {
    pub runner: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RunFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Task graph run failed with {} runner: {}", self.runner, self.error)
    }
}

impl StructuredLog for RunFailed<'_> {
    fn log(&self) {
        tracing::error!(runner = self.runner, error = %self.error, "{}", self);
    }
}

/// A level of the graph is about to run.
///
/// # Log Level
/// `debug!`
pub struct LevelStarted {
    pub level: usize,
    pub level_count: usize,
    pub node_count: usize,
}

impl Display for LevelStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Running level {}/{} with {} nodes",
            self.level + 1,
            self.level_count,
            self.node_count
        )
    }
}

impl StructuredLog for LevelStarted {
    fn log(&self) {
        tracing::debug!(
            level = self.level,
            level_count = self.level_count,
            node_count = self.node_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "level",
            span_name = name,
            level = self.level,
            node_count = self.node_count,
        )
    }
}

/// A node is about to run its operation.
///
/// # Log Level
/// `debug!`
pub struct NodeStarted<'a> {
    pub node_id: &'a str,
    pub type_tag: &'a str,
    pub input_count: usize,
}

impl Display for NodeStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Running node '{}' ({}) with {} inputs",
            self.node_id, self.type_tag, self.input_count
        )
    }
}

impl StructuredLog for NodeStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            node_id = self.node_id,
            type_tag = self.type_tag,
            input_count = self.input_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "node",
            span_name = name,
            node_id = self.node_id,
            type_tag = self.type_tag,
        )
    }
}

/// A node finished.
///
/// # Log Level
/// `debug!`
pub struct NodeCompleted<'a> {
    pub node_id: &'a str,
    pub type_tag: &'a str,
    pub output_count: usize,
    pub duration: Duration,
}

impl Display for NodeCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' ({}) produced {} outputs in {:?}",
            self.node_id, self.type_tag, self.output_count, self.duration
        )
    }
}

impl StructuredLog for NodeCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            node_id = self.node_id,
            type_tag = self.type_tag,
            output_count = self.output_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }
}

/// A node's operation returned an error.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct NodeFailed<'a> {
    pub node_id: &'a str,
    pub type_tag: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for NodeFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' ({}) failed: {}",
            self.node_id, self.type_tag, self.error
        )
    }
}

impl StructuredLog for NodeFailed<'_> {
    fn log(&self) {
        tracing::error!(
            node_id = self.node_id,
            type_tag = self.type_tag,
            error = %self.error,
            "{}", self
        );
    }
}
