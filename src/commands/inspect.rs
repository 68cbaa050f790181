//! Inspect command implementation
//!
//! Scans a repository checkout for package-reference files, extracts the
//! references they declare, applies the include/exclude filters and prints a
//! report. `--json` switches to machine-readable output.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use depkeeper::inspection::{read, scan};
use depkeeper::settings::{GlobalOptions, ModalSettings, SettingsContainer};

use crate::commands;

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Repository checkout to inspect (defaults to the current directory)
    #[arg(value_name = "DIR", default_value = ".")]
    pub target: PathBuf,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the inspect command, returning the process exit code.
pub fn run(args: InspectArgs, options: &GlobalOptions) -> i32 {
    let modal = ModalSettings::new(args.target.clone());
    commands::run_validated(options, modal, &[commands::target_exists], |settings| {
        execute(&args, settings)
    })
}

fn execute(args: &InspectArgs, settings: &SettingsContainer) -> Result<()> {
    let found = scan::scan(&settings.modal.target)?;

    let mut references = Vec::new();
    for path in &found {
        for reference in read::read_references(path)? {
            if settings.user.selects(&reference.id) {
                references.push(reference);
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&references)?);
        return Ok(());
    }

    println!(
        "{} package reference file(s), {} package reference(s)",
        found.len(),
        references.len()
    );
    for reference in &references {
        println!(
            "  {} {} ({})",
            reference.id,
            reference.version,
            reference.path.relative_path().display()
        );
    }

    Ok(())
}
