// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::time::Instant;

use crate::config::NodeConfig;
use crate::engine::RunResults;
use crate::errors::ExecutionError;
use crate::observability::messages::engine::{
    NodeCompleted, NodeFailed, NodeStarted, RunCompleted, RunFailed,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{NodeContext, Operation, PortValues, SourceValues};
use tracing::Instrument;

/// Gather a node's input values from already produced outputs, falling back
/// to external source values.
pub(crate) fn resolve_inputs(
    node: &NodeConfig,
    produced: &HashMap<String, PortValues>,
    sources: &SourceValues,
) -> Result<PortValues, ExecutionError> {
    let mut inputs = PortValues::new();

    for binding in &node.inputs {
        let producer = binding.source.node_id.as_str();
        let value = produced
            .get(producer)
            .or_else(|| sources.get(producer))
            .and_then(|values| values.get(&binding.source.port))
            .ok_or_else(|| ExecutionError::MissingOutput {
                node_id: node.id.clone(),
                input_port: binding.port.clone(),
                producer: producer.to_string(),
                output_port: binding.source.port.clone(),
            })?;

        inputs.insert(binding.port.clone(), value.clone());
    }

    Ok(inputs)
}

/// Run one node's operation inside a `node` span, logging the outcome.
pub(crate) async fn run_node(
    node: &NodeConfig,
    operation: &dyn Operation,
    inputs: PortValues,
) -> Result<PortValues, ExecutionError> {
    let ctx = NodeContext::from_node(node);
    let start = NodeStarted {
        node_id: &node.id,
        type_tag: &node.type_tag,
        input_count: inputs.len(),
    };
    let span = start.span("run_node");
    span.in_scope(|| start.log());
    let started = Instant::now();

    match operation.run(&ctx, inputs).instrument(span.clone()).await {
        Ok(outputs) => {
            span.in_scope(|| {
                NodeCompleted {
                    node_id: &node.id,
                    type_tag: &node.type_tag,
                    output_count: outputs.len(),
                    duration: started.elapsed(),
                }
                .log()
            });
            Ok(outputs)
        }
        Err(e) => {
            span.in_scope(|| {
                NodeFailed {
                    node_id: &node.id,
                    type_tag: &node.type_tag,
                    error: &e,
                }
                .log()
            });
            Err(ExecutionError::OperationFailed {
                node_id: node.id.clone(),
                type_tag: node.type_tag.clone(),
                reason: e.message,
            })
        }
    }
}

/// Log how a run ended and pass the result through.
pub(crate) fn log_run_outcome(
    runner: &str,
    node_count: usize,
    started: Instant,
    result: Result<RunResults, ExecutionError>,
) -> Result<RunResults, ExecutionError> {
    match &result {
        Ok(_) => RunCompleted {
            runner,
            node_count,
            duration: started.elapsed(),
        }
        .log(),
        Err(e) => RunFailed { runner, error: e }.log(),
    }
    result
}
