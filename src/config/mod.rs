// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod model;
mod runtime;
mod validation;

pub mod consts;

pub use loader::{
    load, load_file, load_file_with_options, load_with_options, parse_document, LoadOptions,
};
pub use model::{Document, InputBinding, NodeConfig, PortRef};
pub use runtime::{RunnerOptions, Strategy};
pub use validation::validate_document;
