//! Command-line interface for preparing a captcha tile dataset

use crate::io::configuration::{
    DEFAULT_ARCHIVE_NAME, DEFAULT_KEEP_EXTENSIONS, DEFAULT_WORKSPACE, Settings,
};
use crate::io::error::{Result, invalid_parameter};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "captiles")]
#[command(
    author,
    version,
    about = "Extract a captcha archive, split each image into 3x3 tiles, clean up the originals"
)]
/// Command-line arguments for the dataset preparation tool
pub struct Cli {
    /// Workspace root containing the archive
    #[arg(value_name = "WORKSPACE", default_value = DEFAULT_WORKSPACE)]
    pub workspace: PathBuf,

    /// Archive to extract, relative to the workspace
    #[arg(short, long, default_value = DEFAULT_ARCHIVE_NAME)]
    pub archive: PathBuf,

    /// Extension kept during cleanup; repeat to replace the defaults (txt, zip, py)
    #[arg(short = 'k', long = "keep-ext", value_name = "EXT")]
    pub keep_extensions: Vec<String>,

    /// Answer yes to every confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every file written and removed
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate the arguments into pipeline settings
    ///
    /// # Errors
    ///
    /// Returns an error if a `--keep-ext` value is empty or contains a path separator
    pub fn settings(&self) -> Result<Settings> {
        let keep_extensions = if self.keep_extensions.is_empty() {
            DEFAULT_KEEP_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect()
        } else {
            self.keep_extensions
                .iter()
                .map(|raw| normalize_extension(raw))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Settings {
            root: self.workspace.clone(),
            archive: self.archive.clone(),
            keep_extensions,
            assume_yes: self.yes,
            show_progress: self.should_show_progress(),
        })
    }
}

/// Normalise a user-supplied extension to lower case without a leading dot
///
/// # Errors
///
/// Returns an error if nothing remains after stripping or the value contains
/// a path separator
pub fn normalize_extension(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let extension = trimmed.strip_prefix('.').unwrap_or(trimmed);

    if extension.is_empty() {
        return Err(invalid_parameter(
            "keep-ext",
            &raw,
            &"extension must not be empty",
        ));
    }
    if extension.contains(['/', '\\']) {
        return Err(invalid_parameter(
            "keep-ext",
            &raw,
            &"extension must not contain a path separator",
        ));
    }

    Ok(extension.to_ascii_lowercase())
}
