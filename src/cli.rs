// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! CLI argument parsing and plan rendering for the `taskgraph` binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::consts::COLLECTOR_ID;
use crate::config::LoadOptions;
use crate::graph::TaskGraph;

/// Command-line arguments for `taskgraph`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskgraph",
    version,
    about = "Validate task-graph documents and print their execution plans.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKGRAPH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Node id fed by the runtime rather than declared in the document.
    /// May be repeated.
    #[arg(long = "external-source", value_name = "ID", global = true)]
    pub external_sources: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load and validate a document.
    Validate {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Print the execution order of a document.
    Plan {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Print topological levels instead of a flat order.
        #[arg(long)]
        levels: bool,

        #[arg(long, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CliArgs {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            external_sources: self.external_sources.clone(),
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Render a graph's plan as text (one node or level per line) or JSON.
pub fn render_plan(
    graph: &TaskGraph,
    levels: bool,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match (format, levels) {
        (OutputFormat::Json, false) => serde_json::to_string_pretty(&graph.execution_order()),
        (OutputFormat::Json, true) => serde_json::to_string_pretty(&graph.levels()),
        (OutputFormat::Text, false) => Ok(graph
            .execution_order()
            .into_iter()
            .enumerate()
            .map(|(position, id)| format!("{:>3}  {}\n", position + 1, display_id(id)))
            .collect()),
        (OutputFormat::Text, true) => Ok(graph
            .levels()
            .into_iter()
            .enumerate()
            .map(|(level, ids)| {
                let ids: Vec<&str> = ids.into_iter().map(display_id).collect();
                format!("level {}: {}\n", level, ids.join(", "))
            })
            .collect()),
    }
}

/// The collector's empty id is shown quoted so it is visible.
fn display_id(id: &str) -> &str {
    if id == COLLECTOR_ID {
        "\"\""
    } else {
        id
    }
}
