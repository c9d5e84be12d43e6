// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod cli;            // argument parsing + plan rendering
pub mod config;         // document model, loader, validation
pub mod engine;         // graph runners
pub mod errors;         // error handling
pub mod graph;          // validated graph + scheduler
pub mod logging;
pub mod observability;
pub mod operations;     // operation registry + built-ins
pub mod traits;         // Operation and GraphRunner abstractions
