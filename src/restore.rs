//! # Solution Restore Orchestration
//!
//! Given an already-materialized working folder and the resolved package
//! sources, restore dependencies for every solution file discovered in that
//! folder.
//!
//! Restores run strictly one at a time: the restore tool owns a global
//! package cache and lock files, and concurrent invocations risk corrupting
//! them. The first failed invocation aborts the remaining solutions and
//! propagates to the caller; there is no retry and no partial-failure
//! aggregation inside this module. A caller that wants to retry does so at
//! repository granularity.
//!
//! Both collaborators are trait seams: [`Folder`] for discovery and
//! [`FileRestoreCommand`] for the external invocation, with concrete
//! implementations backed by `walkdir`/`glob` and the `dotnet` CLI.

use std::path::{Path, PathBuf};
use std::process::Command;

use glob::Pattern;
use log::{debug, info};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::sources::NuGetSources;

/// A folder that can be searched for files by glob pattern.
pub trait Folder {
    /// Find files whose name matches `pattern`, at any depth.
    ///
    /// The returned order is whatever the underlying scan yields; callers
    /// must not rely on it.
    fn find(&self, pattern: &str) -> Result<Vec<PathBuf>>;
}

/// A checked-out working folder on disk.
pub struct WorkingFolder {
    root: PathBuf,
}

impl WorkingFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Folder for WorkingFolder {
    fn find(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let pattern = Pattern::new(pattern)?;
        let mut matches = Vec::new();

        for entry in WalkDir::new(&self.root)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if pattern.matches(name) {
                    matches.push(entry.into_path());
                }
            }
        }

        Ok(matches)
    }
}

/// The external restore invocation for a single solution file.
pub trait FileRestoreCommand {
    fn invoke(&self, solution: &Path, sources: Option<&NuGetSources>) -> Result<()>;
}

/// Restores a solution by shelling out to `dotnet restore`.
///
/// When a source override is present each source is passed with `--source`,
/// which replaces the ambient `NuGet.config` sources entirely.
pub struct DotnetRestoreCommand;

impl FileRestoreCommand for DotnetRestoreCommand {
    fn invoke(&self, solution: &Path, sources: Option<&NuGetSources>) -> Result<()> {
        info!("restoring {}", solution.display());

        let mut command = Command::new("dotnet");
        command.arg("restore").arg(solution);

        if let Some(sources) = sources {
            for source in sources.items() {
                command.args(["--source", source]);
            }
        }

        let output = command.output().map_err(|e| Error::RestoreFailure {
            solution: solution.to_path_buf(),
            message: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::RestoreFailure {
                solution: solution.to_path_buf(),
                message: format!("{}: {}", output.status, stderr.trim()),
            });
        }

        debug!("restored {}", solution.display());
        Ok(())
    }
}

/// Orchestrates restores across every solution file in a working folder.
pub struct SolutionsRestore<C> {
    restore_command: C,
}

impl<C: FileRestoreCommand> SolutionsRestore<C> {
    pub fn new(restore_command: C) -> Self {
        Self { restore_command }
    }

    /// Restore every solution file in `working_folder`, one at a time.
    ///
    /// The working folder and sources are read-only inputs; all writes are
    /// the restore tool's own.
    pub fn restore(
        &self,
        working_folder: &dyn Folder,
        sources: Option<&NuGetSources>,
    ) -> Result<()> {
        let solutions = working_folder.find("*.sln")?;
        info!("found {} solution file(s) to restore", solutions.len());
        if let Some(sources) = sources {
            info!("using package sources: {}", sources);
        }

        for solution in &solutions {
            // Awaited to completion before the next one starts; the restore
            // tool's package cache is not safe under concurrent writers.
            self.restore_command.invoke(solution, sources)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    /// Folder stub yielding a fixed file list in a fixed order.
    struct StaticFolder {
        files: Vec<PathBuf>,
    }

    impl Folder for StaticFolder {
        fn find(&self, _pattern: &str) -> Result<Vec<PathBuf>> {
            Ok(self.files.clone())
        }
    }

    /// Restore stub recording invocations and failing on demand.
    struct RecordingCommand {
        invoked: RefCell<Vec<PathBuf>>,
        fail_on: Option<PathBuf>,
    }

    impl RecordingCommand {
        fn new() -> Self {
            Self {
                invoked: RefCell::new(Vec::new()),
                fail_on: None,
            }
        }

        fn failing_on(solution: &str) -> Self {
            Self {
                invoked: RefCell::new(Vec::new()),
                fail_on: Some(PathBuf::from(solution)),
            }
        }
    }

    impl FileRestoreCommand for RecordingCommand {
        fn invoke(&self, solution: &Path, _sources: Option<&NuGetSources>) -> Result<()> {
            self.invoked.borrow_mut().push(solution.to_path_buf());
            if self.fail_on.as_deref() == Some(solution) {
                return Err(Error::RestoreFailure {
                    solution: solution.to_path_buf(),
                    message: "simulated failure".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_restores_each_solution_in_discovery_order() {
        let folder = StaticFolder {
            files: vec![PathBuf::from("A.sln"), PathBuf::from("B.sln")],
        };
        let command = RecordingCommand::new();
        let restore = SolutionsRestore::new(command);

        restore.restore(&folder, None).unwrap();

        assert_eq!(
            *restore.restore_command.invoked.borrow(),
            vec![PathBuf::from("A.sln"), PathBuf::from("B.sln")]
        );
    }

    #[test]
    fn test_first_failure_stops_the_batch() {
        let folder = StaticFolder {
            files: vec![PathBuf::from("A.sln"), PathBuf::from("B.sln")],
        };
        let command = RecordingCommand::failing_on("A.sln");
        let restore = SolutionsRestore::new(command);

        let result = restore.restore(&folder, None);

        assert!(matches!(result, Err(Error::RestoreFailure { .. })));
        // A.sln was attempted exactly once; B.sln was never attempted.
        assert_eq!(
            *restore.restore_command.invoked.borrow(),
            vec![PathBuf::from("A.sln")]
        );
    }

    #[test]
    fn test_empty_folder_is_a_successful_noop() {
        let folder = StaticFolder { files: Vec::new() };
        let restore = SolutionsRestore::new(RecordingCommand::new());

        restore.restore(&folder, None).unwrap();

        assert!(restore.restore_command.invoked.borrow().is_empty());
    }

    #[test]
    fn test_working_folder_finds_solutions_at_any_depth() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Top.sln"), "").unwrap();
        fs::create_dir_all(temp.path().join("nested/deeper")).unwrap();
        fs::write(temp.path().join("nested/deeper/Inner.sln"), "").unwrap();
        fs::write(temp.path().join("nested/notes.txt"), "").unwrap();

        let folder = WorkingFolder::new(temp.path());
        let mut found = folder.find("*.sln").unwrap();
        found.sort();

        assert_eq!(
            found,
            vec![
                temp.path().join("Top.sln"),
                temp.path().join("nested/deeper/Inner.sln"),
            ]
        );
    }
}
