//! # depkeeper CLI
//!
//! Binary entry point for the `depkeeper` command-line tool.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Applying the requested verbosity, resolving and validating settings,
//!   and dispatching to the selected command.
//! - Translating failures into logged messages and a process exit code:
//!   settings-validation failures exit with -1, command execution failures
//!   with 1.
//!
//! The core logic lives in the `depkeeper` library crate; the binary is a
//! thin wrapper around it.

mod cli;
mod commands;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    std::process::exit(cli.execute());
}
