//! # Settings Resolution & Validation
//!
//! This module turns raw command input into a validated [`SettingsContainer`],
//! failing fast with an actionable message rather than letting invalid
//! configuration propagate into the update workflow.
//!
//! ## Key Components
//!
//! - **`GlobalOptions`**: the raw, untyped option values as bound by the CLI
//!   layer. Deliberately decoupled from argument parsing so the pipeline can
//!   be driven from tests or other frontends.
//! - **`ValidationResult`**: a tagged success/failure outcome; the sole
//!   composition primitive of the pipeline ("if failure, stop and return it").
//! - **`SettingsContainer`**: modal (non-user) settings plus [`UserSettings`].
//!   Owned exclusively by the resolver until validation completes, then
//!   treated as read-only by all consumers.
//!
//! ## Pipeline
//!
//! Validation is an ordered slice of step functions applied to the container
//! under construction. The base order is fixed and load-bearing:
//!
//! 1. parse the minimum-package-age duration string;
//! 2. compile the include regex if non-blank;
//! 3. compile the exclude regex if non-blank.
//!
//! Execution stops at the first failure; later steps never run and their
//! side effects on the container never happen. A command may append further
//! steps after the base three but must not reorder or skip them.
//!
//! Log verbosity is a caller concern: the CLI applies it before invoking the
//! resolver so diagnostics emitted during validation are visible regardless
//! of the outcome.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use regex::Regex;

use crate::duration;
use crate::sources::NuGetSources;

/// Allowed scope of a version change when updating a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionChange {
    Patch,
    Minor,
    #[default]
    Major,
}

impl FromStr for VersionChange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "patch" => Ok(VersionChange::Patch),
            "minor" => Ok(VersionChange::Minor),
            "major" => Ok(VersionChange::Major),
            _ => Err(format!(
                "unknown version change '{}', expected Patch, Minor or Major",
                s
            )),
        }
    }
}

/// Outcome of one validation step, or of the pipeline as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Success,
    Failure(String),
}

impl ValidationResult {
    /// Construct a failure carrying a human-readable message.
    pub fn failure(message: impl Into<String>) -> Self {
        ValidationResult::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success)
    }

    /// The failure message, if this is a failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Success => None,
            ValidationResult::Failure(message) => Some(message),
        }
    }
}

/// Raw option values as bound by the CLI layer, before validation.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// `-c/--change`; already enumerated, no validation step needed.
    pub allowed_change: VersionChange,
    /// `-s/--source`, repeatable; empty means no override.
    pub sources: Vec<String>,
    /// `-a/--age`; raw duration string, parsed by the first base step.
    pub minimum_package_age: String,
    /// `-i/--include`; raw regex, compiled by the second base step.
    pub include: Option<String>,
    /// `-e/--exclude`; raw regex, compiled by the third base step.
    pub exclude: Option<String>,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            allowed_change: VersionChange::Major,
            sources: Vec::new(),
            minimum_package_age: "7d".to_string(),
            include: None,
            exclude: None,
        }
    }
}

/// Non-user settings describing the invocation itself.
#[derive(Debug, Clone, Default)]
pub struct ModalSettings {
    /// Root of the repository checkout the command operates on.
    pub target: PathBuf,
}

impl ModalSettings {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }
}

/// User-facing settings, populated and validated by the pipeline.
///
/// An absent include or exclude pattern means "no filtering on this axis",
/// never "reject everything".
#[derive(Debug, Clone)]
pub struct UserSettings {
    pub allowed_change: VersionChange,
    pub sources: Option<NuGetSources>,
    pub minimum_package_age: Duration,
    pub includes: Option<Regex>,
    pub excludes: Option<Regex>,
}

impl UserSettings {
    /// Whether a package id passes the include/exclude filters.
    ///
    /// An absent pattern means no filtering on that axis.
    pub fn selects(&self, package_id: &str) -> bool {
        if let Some(includes) = &self.includes {
            if !includes.is_match(package_id) {
                return false;
            }
        }
        if let Some(excludes) = &self.excludes {
            if excludes.is_match(package_id) {
                return false;
            }
        }
        true
    }
}

/// The validated configuration handed to command implementations.
///
/// Created once per invocation; never mutated after validation succeeds, so
/// downstream consumers may share it freely.
#[derive(Debug, Clone)]
pub struct SettingsContainer {
    pub modal: ModalSettings,
    pub user: UserSettings,
}

/// One validation step: inspect the raw options, populate the container,
/// report success or failure.
pub type ValidationStep = fn(&mut SettingsContainer, &GlobalOptions) -> ValidationResult;

/// The fixed base steps, in their load-bearing order.
const BASE_STEPS: [ValidationStep; 3] = [
    populate_minimum_package_age,
    populate_package_includes,
    populate_package_excludes,
];

/// Build and validate a settings container from raw options.
pub fn resolve(options: &GlobalOptions, modal: ModalSettings) -> (SettingsContainer, ValidationResult) {
    resolve_with(options, modal, &[])
}

/// As [`resolve`], with command-specific steps appended after the base steps.
pub fn resolve_with(
    options: &GlobalOptions,
    modal: ModalSettings,
    extra_steps: &[ValidationStep],
) -> (SettingsContainer, ValidationResult) {
    let mut settings = SettingsContainer {
        modal,
        user: UserSettings {
            allowed_change: options.allowed_change,
            sources: NuGetSources::from_options(&options.sources),
            minimum_package_age: Duration::ZERO,
            includes: None,
            excludes: None,
        },
    };

    for step in BASE_STEPS.iter().chain(extra_steps) {
        let result = step(&mut settings, options);
        if !result.is_success() {
            return (settings, result);
        }
    }

    (settings, ValidationResult::Success)
}

fn populate_minimum_package_age(
    settings: &mut SettingsContainer,
    options: &GlobalOptions,
) -> ValidationResult {
    match duration::parse(&options.minimum_package_age) {
        Some(age) => {
            settings.user.minimum_package_age = age;
            ValidationResult::Success
        }
        None => ValidationResult::failure(format!(
            "Min package age '{}' could not be parsed",
            options.minimum_package_age
        )),
    }
}

fn populate_package_includes(
    settings: &mut SettingsContainer,
    options: &GlobalOptions,
) -> ValidationResult {
    match compile_filter(options.include.as_deref(), "Include") {
        Ok(filter) => {
            settings.user.includes = filter;
            ValidationResult::Success
        }
        Err(message) => ValidationResult::Failure(message),
    }
}

fn populate_package_excludes(
    settings: &mut SettingsContainer,
    options: &GlobalOptions,
) -> ValidationResult {
    match compile_filter(options.exclude.as_deref(), "Exclude") {
        Ok(filter) => {
            settings.user.excludes = filter;
            ValidationResult::Success
        }
        Err(message) => ValidationResult::Failure(message),
    }
}

/// Compile an optional filter pattern. Blank or whitespace-only input means
/// "no filter", which is not an error.
fn compile_filter(value: Option<&str>, label: &str) -> Result<Option<Regex>, String> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return Ok(None),
    };

    Regex::new(value)
        .map(Some)
        .map_err(|e| format!("Unable to parse regex '{}' for {}: {}", value, label, e))
}
