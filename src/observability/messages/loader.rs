// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for reading and parsing task-graph documents.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A task-graph file is being read.
///
/// # Log Level
/// `debug!`
pub struct ReadingDocument<'a> {
    pub path: &'a std::path::Path,
}

impl Display for ReadingDocument<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Reading task graph from {}", self.path.display())
    }
}

impl StructuredLog for ReadingDocument<'_> {
    fn log(&self) {
        tracing::debug!(path = %self.path.display(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("read_document", span_name = name, path = %self.path.display())
    }
}

/// A document parsed into node records.
///
/// # Log Level
/// `debug!`
pub struct DocumentParsed {
    pub node_count: usize,
    pub edge_count: usize,
}

impl Display for DocumentParsed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Parsed task graph document: {} nodes, {} input bindings",
            self.node_count, self.edge_count
        )
    }
}

impl StructuredLog for DocumentParsed {
    fn log(&self) {
        tracing::debug!(
            node_count = self.node_count,
            edge_count = self.edge_count,
            "{}", self
        );
    }
}

/// A graph was validated and scheduled.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use taskgraph::observability::messages::loader::GraphLoaded;
///
/// let msg = GraphLoaded {
///     node_count: 12,
///     entry_point_count: 2,
///     level_count: 9,
/// };
///
/// assert_eq!(msg.to_string(), "Loaded task graph: 12 nodes, 2 entry points, 9 levels");
/// ```
pub struct GraphLoaded {
    pub node_count: usize,
    pub entry_point_count: usize,
    pub level_count: usize,
}

impl Display for GraphLoaded {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded task graph: {} nodes, {} entry points, {} levels",
            self.node_count, self.entry_point_count, self.level_count
        )
    }
}

impl StructuredLog for GraphLoaded {
    fn log(&self) {
        tracing::info!(
            node_count = self.node_count,
            entry_point_count = self.entry_point_count,
            level_count = self.level_count,
            "{}", self
        );
    }
}

/// Loading a graph failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct GraphLoadFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for GraphLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to load task graph: {}", self.error)
    }
}

impl StructuredLog for GraphLoadFailed<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }
}
