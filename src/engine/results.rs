// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::traits::PortValues;

/// Outputs of a completed run, keyed by node id.
///
/// Nodes are remembered in the order the runner recorded them: execution
/// order for the sequential runner, level order for the level-by-level
/// runner. Both satisfy every dependency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunResults {
    order: Vec<String>,
    outputs: HashMap<String, PortValues>,
}

impl RunResults {
    pub(crate) fn record(&mut self, node_id: String, outputs: PortValues) {
        if self.outputs.insert(node_id.clone(), outputs).is_none() {
            self.order.push(node_id);
        }
    }

    pub(crate) fn produced(&self) -> &HashMap<String, PortValues> {
        &self.outputs
    }

    /// All output values of one node.
    pub fn outputs(&self, node_id: &str) -> Option<&PortValues> {
        self.outputs.get(node_id)
    }

    /// A single output value.
    pub fn output(&self, node_id: &str, port: &str) -> Option<&serde_yaml::Value> {
        self.outputs.get(node_id).and_then(|values| values.get(port))
    }

    /// Node ids in the order they completed.
    pub fn completion_order(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PortValues)> {
        self.order
            .iter()
            .filter_map(move |id| self.outputs.get(id).map(|values| (id.as_str(), values)))
    }

    /// Outputs without ordering, for comparing runs of different runners.
    pub fn into_outputs(self) -> HashMap<String, PortValues> {
        self.outputs
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn values(pairs: &[(&str, i64)]) -> PortValues {
        pairs
            .iter()
            .map(|(port, v)| (port.to_string(), Value::from(*v)))
            .collect()
    }

    #[test]
    fn test_record_and_lookup() {
        let mut results = RunResults::default();
        results.record("b".to_string(), values(&[("out", 2)]));
        results.record("a".to_string(), values(&[("out", 1), ("extra", 9)]));

        assert_eq!(results.len(), 2);
        assert_eq!(results.completion_order(), vec!["b", "a"]);
        assert_eq!(results.output("a", "extra"), Some(&Value::from(9)));
        assert_eq!(results.output("a", "missing"), None);
        assert!(results.outputs("c").is_none());

        let ids: Vec<&str> = results.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_recording_twice_keeps_first_position() {
        let mut results = RunResults::default();
        results.record("a".to_string(), values(&[("out", 1)]));
        results.record("b".to_string(), values(&[("out", 2)]));
        results.record("a".to_string(), values(&[("out", 3)]));

        assert_eq!(results.completion_order(), vec!["a", "b"]);
        assert_eq!(results.output("a", "out"), Some(&Value::from(3)));
    }
}
