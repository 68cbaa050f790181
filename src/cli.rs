//! CLI argument parsing and command dispatch

use clap::{Parser, Subcommand};
use log::LevelFilter;

use depkeeper::settings::{GlobalOptions, VersionChange};

use crate::commands;

/// Scan repository checkouts for NuGet package references and drive restore
/// workflows
#[derive(Parser, Debug)]
#[command(name = "depkeeper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Allowed version change: Patch, Minor, Major
    #[arg(
        short = 'c',
        long = "change",
        global = true,
        value_name = "SCOPE",
        default_value = "Major",
        value_parser = parse_change
    )]
    change: VersionChange,

    /// NuGet package source to use; repeatable, overrides all sources in
    /// NuGet.config when present
    #[arg(short = 's', long = "source", global = true, value_name = "URL")]
    source: Vec<String>,

    /// Verbosity: q[uiet], m[inimal], n[ormal], d[etailed]
    #[arg(
        short = 'v',
        long = "verbosity",
        global = true,
        value_name = "LEVEL",
        default_value = "n",
        value_parser = parse_verbosity
    )]
    verbosity: LevelFilter,

    /// Exclude updates below a minimum package age, e.g. 0, 12h, 3d, 2w
    #[arg(
        short = 'a',
        long = "age",
        global = true,
        value_name = "AGE",
        default_value = "7d"
    )]
    age: String,

    /// Only consider packages matching this regex pattern
    #[arg(short = 'i', long = "include", global = true, value_name = "REGEX")]
    include: Option<String>,

    /// Do not consider packages matching this regex pattern
    #[arg(short = 'e', long = "exclude", global = true, value_name = "REGEX")]
    exclude: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List package references found in a repository checkout
    Inspect(commands::inspect::InspectArgs),
    /// Restore every solution file in a repository checkout
    Restore(commands::restore::RestoreArgs),
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command, returning the process exit code.
    pub fn execute(self) -> i32 {
        // Verbosity takes effect before validation so diagnostics emitted
        // during validation are visible regardless of the outcome.
        env_logger::Builder::from_default_env()
            .filter_level(self.verbosity)
            .init();

        let options = GlobalOptions {
            allowed_change: self.change,
            sources: self.source,
            minimum_package_age: self.age,
            include: self.include,
            exclude: self.exclude,
        };

        match self.command {
            Commands::Inspect(args) => commands::inspect::run(args, &options),
            Commands::Restore(args) => commands::restore::run(args, &options),
            Commands::Completions(args) => commands::completions::run(args),
        }
    }
}

fn parse_change(value: &str) -> Result<VersionChange, String> {
    value.parse()
}

fn parse_verbosity(value: &str) -> Result<LevelFilter, String> {
    match value {
        "q" | "quiet" => Ok(LevelFilter::Error),
        "m" | "minimal" => Ok(LevelFilter::Warn),
        "n" | "normal" => Ok(LevelFilter::Info),
        "d" | "detailed" => Ok(LevelFilter::Debug),
        _ => Err(format!(
            "unknown verbosity '{}', expected q[uiet], m[inimal], n[ormal] or d[etailed]",
            value
        )),
    }
}
