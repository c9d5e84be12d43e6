// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Validated task graph and its deterministic scheduling.

mod adjacency;
mod entry_points;
mod scheduler;
mod task_graph;


pub(crate) use adjacency::Adjacency;
pub(crate) use scheduler::find_cycle;

pub use entry_points::EntryPoints;
pub use task_graph::{Edge, TaskGraph};
