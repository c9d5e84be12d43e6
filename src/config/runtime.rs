// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;

use crate::config::consts::DEFAULT_CONCURRENCY_FALLBACK;

/// How a runner walks the graph.
///
/// # Variants
/// * `Sequential` - one node at a time, in execution order
/// * `Level` - each topological level concurrently, levels in sequence
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Sequential,
    Level,
}

/// Runner configuration.
///
/// # Fields
/// * `strategy` - runner to build (defaults to `sequential`)
/// * `max_concurrency` - upper bound on nodes running at once within a level
///   (defaults to the available parallelism)
///
/// # Example
/// ```yaml
/// strategy: level
/// max_concurrency: 4
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RunnerOptions {
    #[serde(default)]
    pub strategy: Strategy,
    pub max_concurrency: Option<usize>,
}

impl RunnerOptions {
    /// Configured concurrency, or the number of available cores. Never zero.
    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
            .unwrap_or_else(default_concurrency)
            .max(1)
    }
}

fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(DEFAULT_CONCURRENCY_FALLBACK)
}
