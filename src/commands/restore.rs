//! Restore command implementation
//!
//! Runs the solution-restore orchestrator over a checkout: every `*.sln`
//! file is restored one at a time with `dotnet restore`, using the resolved
//! package-source overrides when present.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use depkeeper::restore::{DotnetRestoreCommand, SolutionsRestore, WorkingFolder};
use depkeeper::settings::{GlobalOptions, ModalSettings, SettingsContainer};

use crate::commands;

/// Arguments for the restore command
#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Repository checkout to restore (defaults to the current directory)
    #[arg(value_name = "DIR", default_value = ".")]
    pub target: PathBuf,
}

/// Execute the restore command, returning the process exit code.
pub fn run(args: RestoreArgs, options: &GlobalOptions) -> i32 {
    let modal = ModalSettings::new(args.target.clone());
    commands::run_validated(options, modal, &[commands::target_exists], |settings| {
        execute(settings)
    })
}

fn execute(settings: &SettingsContainer) -> Result<()> {
    let folder = WorkingFolder::new(&settings.modal.target);
    let restore = SolutionsRestore::new(DotnetRestoreCommand);

    restore.restore(&folder, settings.user.sources.as_ref())?;

    println!("Restore complete");
    Ok(())
}
