//! Digest extraction from a package archive.
//!
//! Opens the archive, looks up the manifest member and runs the line scanner
//! over it. Every handle is owned by the call: the manifest entry reader is
//! dropped before the archive, and both are dropped on every return path.

mod error;


use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use tracing::Level;
use zip::ZipArchive;

use crate::manifest::{self, DigestSpec};

pub use error::ExtractError;

/// Extract the digest, folding every failure into `None`.
///
/// Failures are logged; malformed manifests only at debug level.
pub fn extract_digest(archive_path: &Path, spec: &DigestSpec) -> Option<String> {
    match try_extract_digest(archive_path, spec) {
        Ok(digest) => Some(digest),
        Err(e) => {
            log_absence(archive_path, &e);
            None
        }
    }
}

/// Extract the digest, keeping the failure reason.
pub fn try_extract_digest(archive_path: &Path, spec: &DigestSpec) -> Result<String, ExtractError> {
    if let Some(field) = spec.empty_field() {
        return Err(ExtractError::InvalidSpec(field));
    }
    let file = File::open(archive_path).map_err(ExtractError::Open)?;
    tracing::debug!(archive = %archive_path.display(), entry = %spec.manifest_entry, "opened archive");
    extract_from_reader(BufReader::new(file), spec)
}

/// Extract the digest from any seekable zip stream. Takes ownership of
/// `reader`, which is dropped before this returns.
pub fn extract_from_reader<R: Read + Seek>(
    reader: R,
    spec: &DigestSpec,
) -> Result<String, ExtractError> {
    if let Some(field) = spec.empty_field() {
        return Err(ExtractError::InvalidSpec(field));
    }
    let mut archive = ZipArchive::new(reader).map_err(ExtractError::InvalidArchive)?;
    let entry = archive
        .by_name(&spec.manifest_entry)
        .map_err(|e| ExtractError::from_entry_error(e, &spec.manifest_entry))?;
    manifest::scan_lines(manifest::manifest_lines(BufReader::new(entry)), spec)
}

pub(crate) fn log_absence(archive_path: &Path, err: &ExtractError) {
    let archive = archive_path.display();
    let level = absence_level(err);
    if level == Level::DEBUG {
        tracing::debug!(%archive, "no digest: {}", err);
    } else if level == Level::WARN {
        tracing::warn!(%archive, "no digest: {}", err);
    } else {
        tracing::error!(%archive, "failed reading manifest: {}", err);
    }
}

/// Malformed manifests are routine; a missing manifest or a bad spec is worth
/// a warning; anything else is an I/O-level failure.
fn absence_level(err: &ExtractError) -> Level {
    match err {
        e if e.is_malformed() => Level::DEBUG,
        ExtractError::EntryMissing(_)
        | ExtractError::InvalidSpec(_)
        | ExtractError::PackageNotFound(_) => Level::WARN,
        _ => Level::ERROR,
    }
}
