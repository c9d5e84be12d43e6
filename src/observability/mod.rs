// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic and operational log line goes through a message struct
//! that implements `Display` and [`messages::StructuredLog`]:
//!
//! * no magic strings scattered through the loader and runners
//! * consistent fields on every event (`node_id`, `node_count`, ...)
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::loader` - document parsing and graph construction
//! * `messages::validation` - duplicate ids, dangling references, cycles
//! * `messages::engine` - runner lifecycle and per-node execution events
//!
//! # Usage
//!
//! ```rust
//! use taskgraph::observability::messages::StructuredLog;
//! use taskgraph::observability::messages::engine::NodeFailed;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "bad column");
//! let msg = NodeFailed {
//!     node_id: "value_filter",
//!     type_tag: "ValueFilterNode",
//!     error: &error,
//! };
//!
//! msg.log();
//! ```

pub mod messages;

#[cfg(test)]
pub(crate) mod span_recorder;
