//! Recursive discovery of workspace files

use crate::io::configuration::IMAGE_EXTENSION;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Every non-directory entry below `root`, visited depth-first in file-name order
///
/// Symbolic links are yielded as entries of their own and are not followed.
/// Entries that cannot be read are logged and skipped.
pub fn workspace_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::warn!(%error, "skipping unreadable workspace entry");
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir())
        .map(DirEntry::into_path)
}

/// Candidate captcha images below `root`
///
/// Symbolic links count when they resolve to a regular file.
pub fn discover_images(root: &Path) -> Vec<PathBuf> {
    workspace_files(root)
        .filter(|path| has_extension(path, IMAGE_EXTENSION) && path.is_file())
        .collect()
}

/// Check if a path's extension equals `extension`, ignoring ASCII case
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
