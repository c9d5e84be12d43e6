// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for task-graph validation warnings and errors.
//!
//! This module contains message types for logging events related to:
//! * Duplicate node id detection
//! * Dangling input reference detection
//! * Cyclic dependency detection

use crate::errors::format_cycle;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Cyclic dependency detected in a task graph.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use taskgraph::observability::messages::validation::CyclicDependencyDetected;
///
/// let cycle = vec!["sort_node", "add_return_feature", "sort_node"];
/// let msg = CyclicDependencyDetected {
///     cycle: &cycle,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct CyclicDependencyDetected<'a> {
    pub cycle: &'a [&'a str],
}

impl Display for CyclicDependencyDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cyclic dependency detected: {}", format_cycle(self.cycle))
    }
}

impl StructuredLog for CyclicDependencyDetected<'_> {
    fn log(&self) {
        tracing::error!(
            cycle = %format_cycle(self.cycle),
            cycle_length = self.cycle.len(),
            "{}", self
        );
    }
}

/// An input binding points at a node that is not declared.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use taskgraph::observability::messages::validation::UnresolvedReference;
///
/// let msg = UnresolvedReference {
///     node_id: "sort_node",
///     input_port: "in",
///     missing_node: "stock_dta",
///     missing_port: "stock_out",
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Node 'sort_node' input 'in' references missing node 'stock_dta' (port 'stock_out')"
/// );
///
/// tracing::error!("{}", msg);
/// ```
pub struct UnresolvedReference<'a> {
    pub node_id: &'a str,
    pub input_port: &'a str,
    pub missing_node: &'a str,
    pub missing_port: &'a str,
}

impl Display for UnresolvedReference<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' input '{}' references missing node '{}' (port '{}')",
            self.node_id, self.input_port, self.missing_node, self.missing_port
        )
    }
}

impl StructuredLog for UnresolvedReference<'_> {
    fn log(&self) {
        tracing::error!(
            node_id = self.node_id,
            input_port = self.input_port,
            missing_node = self.missing_node,
            missing_port = self.missing_port,
            "{}", self
        );
    }
}

/// Duplicate node id detected.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DuplicateNodeId<'a> {
    pub node_id: &'a str,
}

impl Display for DuplicateNodeId<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate node ID: '{}'", self.node_id)
    }
}

impl StructuredLog for DuplicateNodeId<'_> {
    fn log(&self) {
        tracing::error!(node_id = self.node_id, "{}", self);
    }
}

/// Validation started.
///
/// # Log Level
/// `debug!` - Routine step of every load
pub struct ValidationStarted {
    pub node_count: usize,
}

impl Display for ValidationStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Validating task graph with {} nodes", self.node_count)
    }
}

impl StructuredLog for ValidationStarted {
    fn log(&self) {
        tracing::debug!(node_count = self.node_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("validation", span_name = name, node_count = self.node_count)
    }
}

/// Validation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use taskgraph::observability::messages::validation::ValidationFailed;
///
/// let msg = ValidationFailed {
///     error_count: 3,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ValidationFailed {
    pub error_count: usize,
}

impl Display for ValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Task graph validation failed with {} errors", self.error_count)
    }
}

impl StructuredLog for ValidationFailed {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }
}
