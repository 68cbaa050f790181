//! # depkeeper Library
//!
//! Core functionality for scanning repository checkouts for NuGet package
//! references and driving restore workflows. It is used by the `depkeeper`
//! command-line tool but can be embedded in other maintenance tooling.
//!
//! ## Core Concepts
//!
//! - **Settings (`settings`)**: the layered resolution-and-validation
//!   pipeline that turns raw command input into a fail-fast-validated
//!   [`settings::SettingsContainer`].
//! - **Inspection (`inspection`)**: discovery and canonical addressing of
//!   package-reference files, plus per-dialect reference extraction.
//! - **Restore (`restore`)**: the orchestrator that restores every solution
//!   file in a checkout, strictly sequentially, via an external restore
//!   command.
//! - **Sources (`sources`)**: explicit package-source overrides; absence
//!   means "use ambient configuration".
//!
//! ## Execution Flow
//!
//! The CLI binds raw options, applies verbosity, then calls
//! [`settings::resolve`]. On validation failure the message is logged and the
//! process exits non-zero; on success the validated container is handed to a
//! command implementation, which typically scans the checkout with
//! [`inspection::scan::scan`] and restores solutions with
//! [`restore::SolutionsRestore`].

pub mod duration;
pub mod error;
pub mod inspection;
pub mod restore;
pub mod settings;
pub mod sources;
