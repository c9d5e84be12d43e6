// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod factory;
pub mod level_by_level;
mod node;
mod results;
pub mod sequential;

pub use factory::RunnerFactory;
pub use level_by_level::LevelByLevelRunner;
pub use results::RunResults;
pub use sequential::SequentialRunner;
