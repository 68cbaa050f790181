//! Discovery of package-reference files in a checkout

use std::fs;
use std::path::Path;

use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::inspection::package_path::{PackagePath, PackageReferenceType};

/// Directories that never contain source-controlled package references.
const SKIPPED_DIRS: [&str; 4] = ["bin", "obj", "packages", "node_modules"];

/// Walk a checkout and return a [`PackagePath`] for every package-reference
/// file found, classified by dialect.
///
/// Hidden directories and build-output directories are skipped. A project
/// file with a `packages.config` next to it is classified as old-style; its
/// references live in the config file, which is reported separately.
pub fn scan(root: &Path) -> Result<Vec<PackagePath>> {
    let base = root.to_str().ok_or_else(|| Error::Path {
        message: format!("checkout root '{}' is not valid UTF-8", root.display()),
    })?;

    let mut found = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_skipped(entry));

    for entry in walker.filter_map(std::result::Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(reference_type) = classify(entry.path()) else {
            continue;
        };

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_str()
            .ok_or_else(|| Error::Path {
                message: format!("path '{}' is not valid UTF-8", entry.path().display()),
            })?
            .to_string();

        debug!("found {:?} reference file: {}", reference_type, relative);
        found.push(PackagePath::new(base, &relative, reference_type)?);
    }

    Ok(found)
}

fn is_skipped(entry: &DirEntry) -> bool {
    // The walk root is the checkout itself, whatever it is named.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
        .unwrap_or(false)
}

fn classify(path: &Path) -> Option<PackageReferenceType> {
    let name = path.file_name()?.to_str()?;

    if name.eq_ignore_ascii_case("packages.config") {
        return Some(PackageReferenceType::PackagesConfig);
    }

    let extension = path.extension()?.to_str()?;
    match extension.to_ascii_lowercase().as_str() {
        "csproj" | "fsproj" | "vbproj" => {
            if has_sibling_packages_config(path) {
                Some(PackageReferenceType::ProjectFileOldStyle)
            } else {
                Some(PackageReferenceType::ProjectFile)
            }
        }
        "nuspec" => Some(PackageReferenceType::Nuspec),
        _ => None,
    }
}

fn has_sibling_packages_config(project: &Path) -> bool {
    // Same case rule as classify: the config file name is matched
    // case-insensitively.
    let Some(dir) = project.parent() else {
        return false;
    };
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };

    entries.filter_map(std::result::Result::ok).any(|entry| {
        entry.path().is_file()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.eq_ignore_ascii_case("packages.config"))
    })
}
