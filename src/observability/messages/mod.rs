// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `loader` - document parsing and graph construction
//! * `validation` - configuration validation warnings and errors
//! * `engine` - runner lifecycle and node execution events

use tracing::Span;

pub mod engine;
pub mod loader;
pub mod validation;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a `tracing` event at its level.
    fn log(&self);

    /// Open a span carrying the message's fields.
    ///
    /// Only messages that mark the start of a unit of work (reading a file,
    /// validating, a run, a level, a node) open a real span; point-in-time
    /// events keep the disabled default.
    fn span(&self, _name: &str) -> Span {
        Span::none()
    }
}
