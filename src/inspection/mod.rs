//! # Repository Inspection
//!
//! Discovery and addressing of package-reference files within a repository
//! checkout.
//!
//! - [`package_path`] is the canonical path model every downstream consumer
//!   relies on.
//! - [`scan`] walks a checkout and classifies reference files by dialect.
//! - [`read`] extracts `(id, version)` pairs from a discovered file.

pub mod package_path;
pub mod read;
pub mod scan;

pub use package_path::{PackagePath, PackageReferenceType};
pub use read::PackageReference;
