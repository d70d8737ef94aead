//! Archive staging: unpacking the dataset zip into the workspace

use crate::io::error::{Result, TilerError, file_system};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the archive inside the workspace and check that it exists
///
/// # Errors
///
/// Returns `MissingArchive` if no regular file exists at the resolved path
pub fn require_archive(root: &Path, archive: &Path) -> Result<PathBuf> {
    let path = root.join(archive);
    if path.is_file() {
        Ok(path)
    } else {
        Err(TilerError::MissingArchive { path })
    }
}

/// Extract every entry of a zip archive below `destination`
///
/// Entries whose names would escape `destination` are skipped. Existing files
/// are overwritten.
///
/// # Errors
///
/// Returns an error if:
/// - The archive cannot be opened or is not a valid zip file
/// - An entry cannot be read or decompressed
/// - A directory or file cannot be created in the destination
pub fn stage_archive(archive: &Path, destination: &Path) -> Result<usize> {
    let archive_error = |source: zip::result::ZipError| TilerError::Archive {
        path: archive.to_path_buf(),
        source,
    };

    let file = fs::File::open(archive).map_err(|e| file_system(archive, "open archive", e))?;
    let mut zip = zip::ZipArchive::new(file).map_err(archive_error)?;

    let mut extracted = 0;
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(archive_error)?;

        let Some(relative) = entry.enclosed_name() else {
            tracing::warn!(entry = entry.name(), "skipping archive entry outside workspace");
            continue;
        };
        let output_path = destination.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&output_path)
                .map_err(|e| file_system(&output_path, "create directory", e))?;
            continue;
        }

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| file_system(parent, "create directory", e))?;
        }
        let mut output = fs::File::create(&output_path)
            .map_err(|e| file_system(&output_path, "create file", e))?;
        std::io::copy(&mut entry, &mut output).map_err(|e| {
            // Decompression failures surface through the reader as I/O errors
            archive_error(zip::result::ZipError::Io(e))
        })?;
        tracing::debug!(path = %output_path.display(), "extracted");
        extracted += 1;
    }

    Ok(extracted)
}
