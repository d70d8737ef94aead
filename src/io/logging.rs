//! Diagnostic logging to stderr

use tracing::Level;

/// Install the process-wide diagnostic subscriber
///
/// Operator-facing output does not go through here; this carries the
/// per-file detail shown with `--verbose`. Returns false if a subscriber
/// was already installed.
pub fn init(verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(max_level(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Most detailed level emitted for the given verbosity
pub const fn max_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}
