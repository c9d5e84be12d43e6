// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod execution;
mod registry;

pub use config::{GraphError, PortRefError, ValidationError};
pub(crate) use config::format_cycle;
pub use execution::{ExecutionError, OperationError};
pub use registry::RegistryError;
