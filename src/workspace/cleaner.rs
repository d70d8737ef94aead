//! Removal of original inputs and the directories they leave empty
//!
//! Files whose extension is on the keep list survive, as do the tiles the
//! extractor wrote. Directories are removed depth-first and only when empty;
//! a directory that still holds something is left in place without error.

use crate::io::error::{TilerError, file_system};
use crate::io::prompt::Confirm;
use crate::tiling::extractor::is_tile_output;
use crate::workspace::discovery::{has_extension, workspace_files};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file that could not be deleted
#[derive(Debug)]
pub struct CleanupFailure {
    /// File that survived
    pub path: PathBuf,
    /// Cause of the failure
    pub error: TilerError,
}

/// Counts from a cleanup pass
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// Files deleted
    pub files_removed: usize,
    /// Files that could not be deleted
    pub failures: Vec<CleanupFailure>,
    /// Directories removed after becoming empty
    pub dirs_removed: usize,
    /// Directories left in place because they were not empty
    pub dirs_retained: usize,
}

/// What the cleanup stage did
#[derive(Debug)]
pub enum CleanupOutcome {
    /// Every file is on the keep list
    NothingToClean,
    /// The operator declined cleanup
    Declined {
        /// Number of files that would have been deleted
        candidates: usize,
    },
    /// Deletion ran to the end
    Completed(CleanupReport),
}

/// Deletes everything below a workspace root except kept files
#[derive(Debug, Clone)]
pub struct Cleaner {
    root: PathBuf,
    keep_extensions: Vec<String>,
}

impl Cleaner {
    /// Create a cleaner keeping files with any of `keep_extensions`
    ///
    /// Extensions are given without the leading dot and compared ignoring
    /// ASCII case.
    pub fn new(root: impl Into<PathBuf>, keep_extensions: Vec<String>) -> Self {
        Self {
            root: root.into(),
            keep_extensions,
        }
    }

    /// Check if a file survives cleanup
    pub fn is_kept(&self, path: &Path) -> bool {
        self.keep_extensions
            .iter()
            .any(|extension| has_extension(path, extension))
            || is_tile_output(&self.root, path)
    }

    /// Files that cleanup would delete
    pub fn deletion_candidates(&self) -> Vec<PathBuf> {
        workspace_files(&self.root)
            .filter(|path| !self.is_kept(path))
            .collect()
    }

    /// Collect candidates, ask for confirmation and clean
    // Allow print for operator-facing counts and the final summary
    #[allow(clippy::print_stdout)]
    pub fn run<C: Confirm + ?Sized>(&self, confirm: &mut C) -> CleanupOutcome {
        let candidates = self.deletion_candidates();

        if candidates.is_empty() {
            println!("No cleanup needed");
            return CleanupOutcome::NothingToClean;
        }

        println!(
            "Found {} files to clean",
            indicatif::HumanCount(candidates.len() as u64)
        );
        if !confirm.confirm("Remove original files and empty directories?", true) {
            println!("Skipping cleanup");
            return CleanupOutcome::Declined {
                candidates: candidates.len(),
            };
        }

        let report = self.clean(&candidates);
        println!(
            "Cleaned {} files, removed {} directories",
            report.files_removed, report.dirs_removed
        );
        if report.dirs_retained > 0 {
            println!(
                "Kept {} directories that still contain files",
                report.dirs_retained
            );
        }
        CleanupOutcome::Completed(report)
    }

    /// Delete `candidates`, then every directory left empty
    // Allow print for per-file failures
    #[allow(clippy::print_stdout)]
    pub fn clean(&self, candidates: &[PathBuf]) -> CleanupReport {
        let mut report = CleanupReport::default();

        for path in candidates {
            match fs::remove_file(path) {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), "removed file");
                    report.files_removed += 1;
                }
                Err(e) => {
                    let error = file_system(path, "remove file", e);
                    println!("Error removing {}: {error}", path.display());
                    report.failures.push(CleanupFailure {
                        path: path.clone(),
                        error,
                    });
                }
            }
        }

        let (removed, retained) = self.remove_empty_dirs();
        report.dirs_removed = removed;
        report.dirs_retained = retained;
        report
    }

    /// Remove empty directories below the root, children before parents
    ///
    /// Returns the number removed and the number left in place. The root
    /// itself is never removed.
    pub fn remove_empty_dirs(&self) -> (usize, usize) {
        let directories: Vec<PathBuf> = WalkDir::new(&self.root)
            .min_depth(1)
            .contents_first(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .map(walkdir::DirEntry::into_path)
            .collect();

        let mut removed = 0;
        let mut retained = 0;
        for directory in directories {
            match fs::remove_dir(&directory) {
                Ok(()) => {
                    tracing::debug!(path = %directory.display(), "removed directory");
                    removed += 1;
                }
                Err(error) => {
                    tracing::debug!(path = %directory.display(), %error, "kept directory");
                    retained += 1;
                }
            }
        }
        (removed, retained)
    }
}
