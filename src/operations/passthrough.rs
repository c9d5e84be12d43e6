// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::OperationError;
use crate::traits::{NodeContext, Operation, PortValues};

pub const PASS_THROUGH_TYPE: &str = "PassThrough";

/// Emits every input unchanged on an output port of the same name.
pub struct PassThroughOperation;

#[async_trait]
impl Operation for PassThroughOperation {
    async fn run(
        &self,
        _ctx: &NodeContext<'_>,
        inputs: PortValues,
    ) -> Result<PortValues, OperationError> {
        Ok(inputs)
    }

    fn name(&self) -> &'static str {
        "pass_through"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_inputs_become_outputs() {
        let conf = serde_yaml::Value::Null;
        let ctx = NodeContext {
            node_id: "relay",
            type_tag: PASS_THROUGH_TYPE,
            conf: &conf,
        };
        let inputs = PortValues::from([("in".to_string(), serde_yaml::Value::from(7))]);

        let outputs = PassThroughOperation.run(&ctx, inputs.clone()).await.unwrap();
        assert_eq!(outputs, inputs);
    }
}
