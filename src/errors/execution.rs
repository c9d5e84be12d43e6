// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::errors::RegistryError;

/// Failure reported by an operation for a single node.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct OperationError {
    pub message: String,
}

impl OperationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that abort a graph run. Runs are fail-fast.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Node '{node_id}' ({type_tag}) failed: {reason}")]
    OperationFailed {
        node_id: String,
        type_tag: String,
        reason: String,
    },

    #[error("Node '{node_id}' input '{input_port}' expects output '{output_port}' from '{producer}', which was not produced")]
    MissingOutput {
        node_id: String,
        input_port: String,
        producer: String,
        output_port: String,
    },

    #[error("Task for node '{node_id}' did not complete: {reason}")]
    TaskJoin { node_id: String, reason: String },
}
