//! skillspan - check what a text-highlighting widget hands back
//!
//! # Usage
//!
//! ```bash
//! # List the sample postings
//! skillspan samples
//!
//! # Inspect a raw widget value against posting 1
//! skillspan inspect -p 1 --raw '[[{"label":"Python","start":77,"end":83}]]'
//!
//! # Preview the save payload
//! skillspan save -p 2 annotations.json
//!
//! # Check a batch of reviewed annotations
//! skillspan validate reviewed.jsonl --strict
//! ```

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use skillspan::cli::commands::{inspect, samples, save, validate};
use skillspan::cli::output::color;
use skillspan::cli::parser::{Cli, Commands};
use skillspan::cli::Context;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let ctx = match Context::load(cli.config.as_deref(), cli.unit, cli.quiet) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            return ExitCode::FAILURE;
        }
    };

    let result: Result<(), String> = match cli.command {
        Commands::Samples(args) => samples::run(args, &ctx),
        Commands::Inspect(args) => inspect::run(args, &ctx),
        Commands::Save(args) => save::run(args, &ctx),
        Commands::Validate(args) => validate::run(args, &ctx),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "skillspan", &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}

/// Default log level for the verbosity flags: `-q` error, `-v` info, `-vv` debug.
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    }
}

/// Route `log` records through a stderr subscriber. `RUST_LOG` wins over flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = log_level(verbose, quiet);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Only fails if a subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
