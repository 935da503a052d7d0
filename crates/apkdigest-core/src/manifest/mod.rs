//! JAR-style manifest scanning: find the digest line that belongs to a named entry.
//!
//! A signed APK's `META-INF/MANIFEST.MF` lists one section per packaged file:
//!
//! ```text
//! Name: classes.dex
//! SHA1-Digest: AbCdEf123==
//! ```
//!
//! The scanner looks for the first line containing the target marker and then
//! treats the very next line as authoritative: it either carries the digest
//! header prefix or the lookup fails.

mod lines;
mod scan;

use serde::{Deserialize, Serialize};

pub use lines::{manifest_lines, ManifestLines};
pub use scan::{scan_lines, step, ScanState, Step};

/// Archive member holding the per-file digests.
pub const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";
/// Compiled-code bundle whose digest identifies the build.
pub const DEX_MARKER: &str = "classes.dex";
/// Prefix of the digest line that follows the marker line.
pub const SHA1_DIGEST_HEADER: &str = "SHA1-Digest: ";

/// What to look for inside an archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestSpec {
    /// Path of the manifest member inside the archive.
    pub manifest_entry: String,
    /// Substring identifying the line that starts the section of interest.
    pub target_marker: String,
    /// Prefix of the line carrying the digest value.
    pub digest_header: String,
}

impl Default for DigestSpec {
    fn default() -> Self {
        Self {
            manifest_entry: MANIFEST_ENTRY.to_string(),
            target_marker: DEX_MARKER.to_string(),
            digest_header: SHA1_DIGEST_HEADER.to_string(),
        }
    }
}

impl DigestSpec {
    /// Returns the name of the first empty field, if any.
    ///
    /// An empty marker would match every line and an empty header every
    /// following line, so both are rejected up front.
    pub fn empty_field(&self) -> Option<&'static str> {
        if self.manifest_entry.is_empty() {
            Some("manifest_entry")
        } else if self.target_marker.is_empty() {
            Some("target_marker")
        } else if self.digest_header.is_empty() {
            Some("digest_header")
        } else {
            None
        }
    }
}
