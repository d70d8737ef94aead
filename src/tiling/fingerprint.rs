//! Short SHA-256 prefixes used as output directory names

use crate::io::configuration::FINGERPRINT_LEN;
use sha2::{Digest, Sha256};
use std::fmt;

/// First hex characters of the SHA-256 digest of an image's raw bytes
///
/// A pure function of the byte content: identical files share a fingerprint
/// and therefore an output directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint raw file content
    pub fn of(bytes: &[u8]) -> Self {
        let digest = format!("{:x}", Sha256::digest(bytes));
        Self(digest.chars().take(FINGERPRINT_LEN).collect())
    }

    /// Hex string form, usable as a directory name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether a directory name has the shape of a fingerprint
    pub fn is_fingerprint_name(name: &str) -> bool {
        name.len() == FINGERPRINT_LEN
            && name
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<std::path::Path> for Fingerprint {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}
