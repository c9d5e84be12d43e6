// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::config::NodeConfig;
use crate::errors::OperationError;

/// Values keyed by port name. Ordered so that anything derived from it (logs,
/// collector output) is stable across runs.
pub type PortValues = BTreeMap<String, serde_yaml::Value>;

/// What an operation sees of the node it runs for.
#[derive(Debug, Clone, Copy)]
pub struct NodeContext<'a> {
    pub node_id: &'a str,
    pub type_tag: &'a str,
    /// The node's `conf`, passed through unvalidated.
    pub conf: &'a serde_yaml::Value,
}

impl<'a> NodeContext<'a> {
    pub fn from_node(node: &'a NodeConfig) -> Self {
        Self {
            node_id: &node.id,
            type_tag: &node.type_tag,
            conf: &node.conf,
        }
    }
}

/// A named operation selected by a node's `type` tag.
///
/// Receives one value per declared input port and returns one value per
/// output port. Conformance of `conf` to the operation's schema is the
/// operation's own responsibility.
#[async_trait]
pub trait Operation: Send + Sync {
    async fn run(
        &self,
        ctx: &NodeContext<'_>,
        inputs: PortValues,
    ) -> Result<PortValues, OperationError>;

    fn name(&self) -> &'static str;
}
