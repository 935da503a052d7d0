//! Failure reasons for a single digest extraction.

use std::io;

use thiserror::Error;
use zip::result::ZipError;

/// Why an extraction produced no digest.
///
/// The absence API ([`super::extract_digest`]) folds all of these into `None`;
/// [`super::try_extract_digest`] hands them to callers that want diagnostics.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No archive could be found for the application.
    #[error("no package found for {0}")]
    PackageNotFound(String),
    /// A `DigestSpec` field was empty.
    #[error("invalid digest spec: {0} must not be empty")]
    InvalidSpec(&'static str),
    /// The archive file could not be opened.
    #[error("cannot open archive: {0}")]
    Open(#[source] io::Error),
    /// The file is not a readable zip archive.
    #[error("cannot read zip archive: {0}")]
    InvalidArchive(#[source] ZipError),
    /// The manifest member does not exist in the archive.
    #[error("archive doesn't contain {0}")]
    EntryMissing(String),
    /// Reading the manifest stream failed (I/O error or invalid UTF-8).
    #[error("failed reading manifest: {0}")]
    Read(#[source] io::Error),
    /// No manifest line contains the target marker.
    #[error("target marker not found in manifest")]
    MarkerNotFound,
    /// The line after the marker is not a digest line.
    #[error("line after target marker is not a digest line")]
    DigestLineMissing,
    /// The background worker running the extraction did not finish.
    #[error("extraction worker failed: {0}")]
    Worker(#[source] tokio::task::JoinError),
}

impl ExtractError {
    /// True when the archive was readable but its manifest did not have the
    /// expected shape.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ExtractError::MarkerNotFound | ExtractError::DigestLineMissing)
    }

    /// Short stable label, used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::PackageNotFound(_) => "package_not_found",
            ExtractError::InvalidSpec(_) => "invalid_spec",
            ExtractError::Open(_) => "open",
            ExtractError::InvalidArchive(_) => "invalid_archive",
            ExtractError::EntryMissing(_) => "entry_missing",
            ExtractError::Read(_) => "read",
            ExtractError::MarkerNotFound => "marker_not_found",
            ExtractError::DigestLineMissing => "digest_line_missing",
            ExtractError::Worker(_) => "worker",
        }
    }

    /// Map a zip lookup error for `entry`.
    pub(super) fn from_entry_error(err: ZipError, entry: &str) -> Self {
        match err {
            ZipError::FileNotFound => ExtractError::EntryMissing(entry.to_string()),
            ZipError::Io(e) => ExtractError::Read(e),
            other => ExtractError::InvalidArchive(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_covers_only_manifest_shape() {
        assert!(ExtractError::MarkerNotFound.is_malformed());
        assert!(ExtractError::DigestLineMissing.is_malformed());
        assert!(!ExtractError::EntryMissing("x".into()).is_malformed());
        assert!(!ExtractError::Read(io::Error::new(io::ErrorKind::Other, "x")).is_malformed());
    }

    #[test]
    fn file_not_found_maps_to_entry_missing() {
        let err = ExtractError::from_entry_error(ZipError::FileNotFound, "META-INF/MANIFEST.MF");
        assert!(matches!(err, ExtractError::EntryMissing(ref name) if name == "META-INF/MANIFEST.MF"));
        assert_eq!(err.to_string(), "archive doesn't contain META-INF/MANIFEST.MF");
    }

    #[test]
    fn zip_io_maps_to_read() {
        let err = ExtractError::from_entry_error(
            ZipError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "eof")),
            "m",
        );
        assert_eq!(err.kind(), "read");
    }
}
