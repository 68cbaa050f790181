//! # CLI Command Implementations
//!
//! One module per subcommand, each with a clap `Args` struct and a `run`
//! function taking the parsed args plus the shared [`GlobalOptions`].
//!
//! `run_validated` is the shared command skeleton: resolve and validate
//! settings (base steps first, then any command-specific steps), short-
//! circuit to exit code -1 on a validation failure, otherwise hand the
//! read-only container to the command body and map its result to an exit
//! code.

use depkeeper::settings::{
    self, GlobalOptions, ModalSettings, SettingsContainer, ValidationResult, ValidationStep,
};

pub mod completions;
pub mod inspect;
pub mod restore;

/// Resolve settings, then run the command body on success.
///
/// A validation failure is logged verbatim and mapped to exit code -1; no
/// partially-populated settings ever reach the body.
pub fn run_validated(
    options: &GlobalOptions,
    modal: ModalSettings,
    extra_steps: &[ValidationStep],
    body: impl FnOnce(&SettingsContainer) -> anyhow::Result<()>,
) -> i32 {
    let (settings, validation) = settings::resolve_with(options, modal, extra_steps);

    if let Some(message) = validation.message() {
        log::error!("{}", message);
        return -1;
    }

    match body(&settings) {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{:#}", e);
            1
        }
    }
}

/// Command-specific validation step: the target checkout must exist.
pub fn target_exists(settings: &mut SettingsContainer, _: &GlobalOptions) -> ValidationResult {
    if settings.modal.target.is_dir() {
        ValidationResult::Success
    } else {
        ValidationResult::failure(format!(
            "Target directory '{}' not found",
            settings.modal.target.display()
        ))
    }
}
