// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use std::process::ExitCode;

use taskgraph::cli::{self, CliArgs, Command};
use taskgraph::config::load_file_with_options;
use taskgraph::logging;

fn main() -> ExitCode {
    let args = cli::parse();

    if let Err(e) = logging::init_logging(args.log_level) {
        eprintln!("error: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let options = args.load_options();

    match &args.command {
        Command::Validate { path } => {
            let graph = load_file_with_options(path, &options)
                .with_context(|| format!("invalid task graph {}", path.display()))?;
            println!("OK: {} nodes", graph.len());
        }
        Command::Plan {
            path,
            levels,
            format,
        } => {
            let graph = load_file_with_options(path, &options)
                .with_context(|| format!("invalid task graph {}", path.display()))?;
            let plan = cli::render_plan(&graph, *levels, *format)
                .context("failed to render plan")?;
            println!("{}", plan.trim_end());
        }
    }

    Ok(())
}
