// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Operation registry and the structural built-in operations.
//!
//! Dataframe operations (loaders, sorts, joins, filters) are supplied by the
//! embedding application; the crate only ships operations that move values
//! between ports.

mod collector;
mod passthrough;
mod registry;

pub use collector::{CollectorOperation, COLLECTED_PORT, COLLECTOR_TYPE};
pub use passthrough::{PassThroughOperation, PASS_THROUGH_TYPE};
pub use registry::OperationRegistry;
