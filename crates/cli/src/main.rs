//! Hydrocalc command-line calculators.

mod args;
mod commands;
mod config;
mod error;
mod prompt;
mod report;

use std::io;

use clap::Parser;
use tracing::{debug, error};

use args::{Cli, Command, TankCommand};
use error::CliError;
use prompt::Prompter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(cli) {
        error!("{err}");
        if let Some(diagnosis) = err.diagnosis() {
            eprintln!("{diagnosis}");
        }
        return Err(err.into());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = config::load(cli.solver_config.as_deref())?;
    debug!(?config, "solver config");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock());

    match cli.command {
        Command::Hydrostatic(args) => commands::hydrostatic(args, &mut prompter),
        Command::PipeFlow(args) => commands::pipe_flow(args, &config, &mut prompter),
        Command::Tank { mode } => match mode {
            TankCommand::Linear(args) => commands::tank_linear(args, &mut prompter),
            TankCommand::Rotational(args) => commands::tank_rotational(args, &mut prompter),
        },
    }
}
