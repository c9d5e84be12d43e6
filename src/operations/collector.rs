// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::OperationError;
use crate::traits::{NodeContext, Operation, PortValues};

/// Type tag conventionally carried by the terminal `""` node.
pub const COLLECTOR_TYPE: &str = "Output_Collector";
/// The single output port of the collector.
pub const COLLECTED_PORT: &str = "collected";

/// Gathers every input into one mapping of input port to value.
///
/// The collector is where a run's final outputs end up; nothing in the graph
/// reads its output, the caller does.
pub struct CollectorOperation;

#[async_trait]
impl Operation for CollectorOperation {
    async fn run(
        &self,
        _ctx: &NodeContext<'_>,
        inputs: PortValues,
    ) -> Result<PortValues, OperationError> {
        let collected: serde_yaml::Mapping = inputs
            .into_iter()
            .map(|(port, value)| (serde_yaml::Value::String(port), value))
            .collect();

        Ok(PortValues::from([(
            COLLECTED_PORT.to_string(),
            serde_yaml::Value::Mapping(collected),
        )]))
    }

    fn name(&self) -> &'static str {
        "collector"
    }
}
