//! Extraction of package references from discovered files
//!
//! Each dialect keeps its references in a different XML shape; extraction is
//! per-tag attribute scraping, which is enough for reading ids and version
//! constraints. Only the attribute form of `Version` is recognized in
//! SDK-style project files. Old-style project files carry no versions of
//! their own; their references live in the sibling `packages.config`, which
//! the scanner reports separately.

use std::fs;

use regex::Regex;
use serde::Serialize;

use crate::error::Result;
use crate::inspection::package_path::{PackagePath, PackageReferenceType};

/// One package reference: a dependency id, its version constraint, and where
/// it was declared.
#[derive(Debug, Clone, Serialize)]
pub struct PackageReference {
    pub id: String,
    pub version: String,
    pub path: PackagePath,
}

/// Read a reference file from disk and extract its package references.
pub fn read_references(path: &PackagePath) -> Result<Vec<PackageReference>> {
    let content = fs::read_to_string(path.full_path())?;
    extract(&content, path)
}

/// Extract package references from file content already in memory.
pub fn extract(content: &str, path: &PackagePath) -> Result<Vec<PackageReference>> {
    match path.reference_type() {
        PackageReferenceType::ProjectFile => {
            extract_tags(content, path, r"<PackageReference\b[^>]*>", "Include|Update", "Version")
        }
        PackageReferenceType::PackagesConfig => {
            extract_tags(content, path, r"<package\b[^>]*>", "id", "version")
        }
        PackageReferenceType::Nuspec => {
            extract_tags(content, path, r"<dependency\b[^>]*>", "id", "version")
        }
        PackageReferenceType::ProjectFileOldStyle => Ok(Vec::new()),
    }
}

fn extract_tags(
    content: &str,
    path: &PackagePath,
    tag_pattern: &str,
    id_attr: &str,
    version_attr: &str,
) -> Result<Vec<PackageReference>> {
    let tag = Regex::new(tag_pattern)?;
    let id = Regex::new(&format!(r#"\b(?:{})\s*=\s*"([^"]+)""#, id_attr))?;
    let version = Regex::new(&format!(r#"\b(?:{})\s*=\s*"([^"]+)""#, version_attr))?;

    let mut references = Vec::new();

    for tag_match in tag.find_iter(content) {
        let text = tag_match.as_str();
        let Some(id_capture) = id.captures(text) else {
            continue;
        };
        // Tags without a version constraint are not actionable; skip them.
        let Some(version_capture) = version.captures(text) else {
            continue;
        };

        references.push(PackageReference {
            id: id_capture[1].to_string(),
            version: version_capture[1].to_string(),
            path: path.clone(),
        });
    }

    Ok(references)
}
