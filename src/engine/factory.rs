// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{RunnerOptions, Strategy};
use crate::engine::level_by_level::LevelByLevelRunner;
use crate::engine::sequential::SequentialRunner;
use crate::traits::GraphRunner;

/// Factory for creating graph runners from configuration
pub struct RunnerFactory;

impl RunnerFactory {
    /// Create a graph runner based on the configured strategy
    pub fn from_options(options: &RunnerOptions) -> Box<dyn GraphRunner> {
        match options.strategy {
            Strategy::Sequential => Box::new(SequentialRunner::new()),
            Strategy::Level => Box::new(LevelByLevelRunner::new(options.max_concurrency())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_selects_runner_by_strategy() {
        struct TestCase {
            strategy: Strategy,
            expected: &'static str,
        }

        let test_cases = vec![
            TestCase {
                strategy: Strategy::Sequential,
                expected: "Sequential",
            },
            TestCase {
                strategy: Strategy::Level,
                expected: "LevelByLevel",
            },
        ];

        for tc in test_cases {
            let options = RunnerOptions {
                strategy: tc.strategy,
                max_concurrency: Some(2),
            };
            assert_eq!(RunnerFactory::from_options(&options).name(), tc.expected);
        }
    }
}
