// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;

use crate::engine::RunResults;
use crate::errors::ExecutionError;
use crate::graph::TaskGraph;
use crate::operations::OperationRegistry;
use crate::traits::PortValues;

/// Output values of external sources, keyed by source id.
pub type SourceValues = HashMap<String, PortValues>;

#[async_trait]
pub trait GraphRunner: Send + Sync {
    /// Run every node of a validated graph.
    ///
    /// - `graph`: the loaded graph; its execution order is honoured
    /// - `registry`: operations keyed by type tag; must cover every node
    /// - `sources`: outputs of the graph's external sources
    ///
    /// Fails fast: unknown type tags are rejected before any node runs and
    /// the first node failure aborts the run.
    async fn run(
        &self,
        graph: &TaskGraph,
        registry: &OperationRegistry,
        sources: SourceValues,
    ) -> Result<RunResults, ExecutionError>;

    fn name(&self) -> &'static str;
}
