//! Canonical addressing of a package-reference file within a checkout
//!
//! All downstream reading and writing logic relies on [`PackagePath`] instead
//! of re-deriving path arithmetic. Instances are immutable value objects; all
//! derived fields are fixed at construction time.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use serde::Serialize;

use crate::error::{Error, Result};

/// The file-format dialect a package reference came from.
///
/// Format-specific readers and writers key off this tag; the path model
/// itself treats all dialects identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PackageReferenceType {
    /// SDK-style project file with `<PackageReference>` elements.
    ProjectFile,
    /// Legacy project file referencing a side-by-side `packages.config`.
    ProjectFileOldStyle,
    /// A `packages.config` file.
    PackagesConfig,
    /// A `.nuspec` package manifest.
    Nuspec,
}

/// Where a package-reference file lives, with all path arithmetic done once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackagePath {
    base_directory: PathBuf,
    relative_path: PathBuf,
    file_name: String,
    full_path: PathBuf,
    full_directory: PathBuf,
    reference_type: PackageReferenceType,
}

impl PackagePath {
    /// Build a package path from the checkout root and a path relative to it.
    ///
    /// A relative path carrying an accidental absolute-style prefix has
    /// exactly one leading separator stripped; more than one is left alone.
    /// Blank or whitespace-only inputs are rejected.
    pub fn new(
        base_directory: &str,
        relative_path: &str,
        reference_type: PackageReferenceType,
    ) -> Result<Self> {
        if base_directory.trim().is_empty() {
            return Err(Error::Path {
                message: "base directory is blank".to_string(),
            });
        }

        if relative_path.trim().is_empty() {
            return Err(Error::Path {
                message: "relative path is blank".to_string(),
            });
        }

        let relative_path = relative_path
            .strip_prefix(MAIN_SEPARATOR)
            .unwrap_or(relative_path);

        let base_directory = PathBuf::from(base_directory);
        let relative_path = PathBuf::from(relative_path);

        let file_name = relative_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| Error::Path {
                message: format!("relative path '{}' has no file name", relative_path.display()),
            })?;

        let full_path = base_directory.join(&relative_path);
        let full_directory = full_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| base_directory.clone());

        Ok(Self {
            base_directory,
            relative_path,
            file_name,
            full_path,
            full_directory,
            reference_type,
        })
    }

    /// The working directory at the root of all the files.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path from the base directory to the file, including the file name.
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Just the file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path to the file.
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// The full directory containing the file, without the file name.
    pub fn full_directory(&self) -> &Path {
        &self.full_directory
    }

    pub fn reference_type(&self) -> PackageReferenceType {
        self.reference_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_path_is_join_of_base_and_relative() {
        let path =
            PackagePath::new("/repo", "src/a.csproj", PackageReferenceType::ProjectFile).unwrap();

        assert_eq!(path.full_path(), Path::new("/repo/src/a.csproj"));
        assert_eq!(path.base_directory(), Path::new("/repo"));
        assert_eq!(path.relative_path(), Path::new("src/a.csproj"));
        assert_eq!(path.file_name(), "a.csproj");
        assert_eq!(path.full_directory(), Path::new("/repo/src"));
        assert_eq!(path.reference_type(), PackageReferenceType::ProjectFile);
    }

    #[test]
    fn test_single_leading_separator_is_stripped() {
        let with = PackagePath::new("/repo", "/src/a.csproj", PackageReferenceType::ProjectFile)
            .unwrap();
        let without =
            PackagePath::new("/repo", "src/a.csproj", PackageReferenceType::ProjectFile).unwrap();

        assert_eq!(with.full_path(), without.full_path());
        assert_eq!(with.relative_path(), Path::new("src/a.csproj"));
    }

    #[test]
    fn test_only_one_separator_is_stripped() {
        let path = PackagePath::new("/repo", "//src/a.csproj", PackageReferenceType::ProjectFile)
            .unwrap();

        assert_eq!(path.relative_path(), Path::new("/src/a.csproj"));
    }

    #[test]
    fn test_blank_base_directory_is_rejected() {
        let result = PackagePath::new("", "src/a.csproj", PackageReferenceType::ProjectFile);
        assert!(matches!(result, Err(Error::Path { .. })));

        let result = PackagePath::new("   ", "src/a.csproj", PackageReferenceType::ProjectFile);
        assert!(matches!(result, Err(Error::Path { .. })));
    }

    #[test]
    fn test_blank_relative_path_is_rejected() {
        let result = PackagePath::new("/repo", "", PackageReferenceType::PackagesConfig);
        assert!(matches!(result, Err(Error::Path { .. })));

        let result = PackagePath::new("/repo", "  ", PackageReferenceType::PackagesConfig);
        assert!(matches!(result, Err(Error::Path { .. })));
    }

    #[test]
    fn test_file_at_checkout_root() {
        let path =
            PackagePath::new("/repo", "packages.config", PackageReferenceType::PackagesConfig)
                .unwrap();

        assert_eq!(path.file_name(), "packages.config");
        assert_eq!(path.full_path(), Path::new("/repo/packages.config"));
        assert_eq!(path.full_directory(), Path::new("/repo"));
    }
}
