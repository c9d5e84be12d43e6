// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for resolving node type tags to registered operations.

use thiserror::Error;

/// Errors that can occur while matching a graph against an operation registry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// A node's `type` has no registered operation
    #[error("Node '{node_id}' has type '{type_tag}' but no operation is registered for it")]
    UnknownType { node_id: String, type_tag: String },
}
