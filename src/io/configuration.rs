//! Tiling constants and runtime configuration defaults

use std::path::PathBuf;

// Workspace layout
/// Archive expected in the workspace root before any stage runs
pub const DEFAULT_ARCHIVE_NAME: &str = "archive.zip";
/// Workspace root used when none is given on the command line
pub const DEFAULT_WORKSPACE: &str = ".";

// Discovery
/// Extension of candidate captcha images (compared ignoring ASCII case)
pub const IMAGE_EXTENSION: &str = "jpg";

// Grid geometry
/// Number of tiles along each side of the grid
pub const GRID_SIDE: u32 = 3;
/// Total number of tiles produced per image
pub const TILE_COUNT: usize = (GRID_SIDE * GRID_SIDE) as usize;

// Output settings
/// Number of hex characters of the content hash used as directory name
pub const FINGERPRINT_LEN: usize = 7;
/// Extension of the lossless tile files
pub const TILE_EXTENSION: &str = "png";

// Cleanup
/// Extensions that survive cleanup: text, archive and script files
pub const DEFAULT_KEEP_EXTENSIONS: [&str; 3] = ["txt", "zip", "py"];

// Process exit statuses for fatal conditions
/// The expected archive is absent from the workspace
pub const EXIT_MISSING_ARCHIVE: u8 = 1;
/// The archive exists but could not be extracted
pub const EXIT_EXTRACTION_FAILED: u8 = 2;
/// Any other fatal error
pub const EXIT_FAILURE: u8 = 3;

/// Validated runtime settings for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Workspace root every stage operates on
    pub root: PathBuf,
    /// Archive location, relative to the root unless absolute
    pub archive: PathBuf,
    /// Extensions, lower-case and without dot, that cleanup keeps
    pub keep_extensions: Vec<String>,
    /// Answer every confirmation gate with yes
    pub assume_yes: bool,
    /// Draw the tiling progress bar
    pub show_progress: bool,
}

impl Settings {
    /// Default settings for a workspace root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            archive: PathBuf::from(DEFAULT_ARCHIVE_NAME),
            keep_extensions: DEFAULT_KEEP_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            assume_yes: false,
            show_progress: true,
        }
    }
}
