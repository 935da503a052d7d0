//! Two-state line scanner over manifest text.

use std::io;

use crate::extract::ExtractError;

use super::DigestSpec;

/// Where the scanner is in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No line containing the marker has been seen yet.
    Seeking,
    /// The previous line contained the marker; the current line decides.
    FoundMarker,
}

/// Outcome of feeding one line to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Keep reading in the given state.
    Continue(ScanState),
    /// The line after the marker carried the digest.
    Digest(String),
    /// The line after the marker did not start with the header.
    Rejected,
}

/// Advance the scanner by one line.
pub fn step(state: ScanState, line: &str, spec: &DigestSpec) -> Step {
    match state {
        ScanState::Seeking if line.contains(spec.target_marker.as_str()) => {
            Step::Continue(ScanState::FoundMarker)
        }
        ScanState::Seeking => Step::Continue(ScanState::Seeking),
        ScanState::FoundMarker => match line.strip_prefix(spec.digest_header.as_str()) {
            Some(digest) => Step::Digest(digest.to_string()),
            None => Step::Rejected,
        },
    }
}

/// Run the scanner over a lazy line sequence (typically [`super::manifest_lines`]).
///
/// Stops at the first terminal step; lines after it are never pulled.
pub fn scan_lines<I>(lines: I, spec: &DigestSpec) -> Result<String, ExtractError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut state = ScanState::Seeking;
    for line in lines {
        let line = line.map_err(ExtractError::Read)?;
        match step(state, &line, spec) {
            Step::Continue(next) => state = next,
            Step::Digest(digest) => return Ok(digest),
            Step::Rejected => return Err(ExtractError::DigestLineMissing),
        }
    }
    match state {
        ScanState::Seeking => Err(ExtractError::MarkerNotFound),
        ScanState::FoundMarker => Err(ExtractError::DigestLineMissing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::manifest_lines;
    use std::io::Cursor;

    fn scan_bytes(bytes: &[u8]) -> Result<String, ExtractError> {
        scan_lines(manifest_lines(Cursor::new(bytes.to_vec())), &DigestSpec::default())
    }

    fn scan_text(text: &str) -> Result<String, ExtractError> {
        scan_bytes(text.as_bytes())
    }

    #[test]
    fn step_seeking_ignores_unrelated_lines() {
        let spec = DigestSpec::default();
        assert_eq!(
            step(ScanState::Seeking, "Manifest-Version: 1.0", &spec),
            Step::Continue(ScanState::Seeking)
        );
    }

    #[test]
    fn step_seeking_matches_marker_substring() {
        let spec = DigestSpec::default();
        assert_eq!(
            step(ScanState::Seeking, "Name: classes.dex", &spec),
            Step::Continue(ScanState::FoundMarker)
        );
    }

    #[test]
    fn step_found_marker_extracts_digest() {
        let spec = DigestSpec::default();
        assert_eq!(
            step(ScanState::FoundMarker, "SHA1-Digest: AbCdEf123==", &spec),
            Step::Digest("AbCdEf123==".to_string())
        );
    }

    #[test]
    fn step_found_marker_requires_prefix_at_line_start() {
        let spec = DigestSpec::default();
        assert_eq!(
            step(ScanState::FoundMarker, "X-SHA1-Digest: AbCdEf123==", &spec),
            Step::Rejected
        );
        assert_eq!(step(ScanState::FoundMarker, "", &spec), Step::Rejected);
    }

    #[test]
    fn scan_finds_digest_after_marker() {
        let text = "Manifest-Version: 1.0\n\
                    Created-By: 1.0 (Android)\n\
                    \n\
                    Name: res/layout/main.xml\n\
                    SHA1-Digest: aaaa\n\
                    \n\
                    Name: classes.dex\n\
                    SHA1-Digest: AbCdEf123==\n";
        assert_eq!(scan_text(text).unwrap(), "AbCdEf123==");
    }

    #[test]
    fn scan_handles_crlf_line_endings() {
        let text = "Manifest-Version: 1.0\r\n\r\nName: classes.dex\r\nSHA1-Digest: AbCdEf123==\r\n";
        assert_eq!(scan_text(text).unwrap(), "AbCdEf123==");
    }

    #[test]
    fn scan_handles_cr_only_line_endings() {
        let text = "Manifest-Version: 1.0\r\rName: classes.dex\rSHA1-Digest: AbCdEf123==\r\r";
        assert_eq!(scan_text(text).unwrap(), "AbCdEf123==");
    }

    #[test]
    fn scan_tolerates_invalid_utf8_in_other_sections() {
        let bytes: &[u8] = b"Manifest-Version: 1.0\n\n\
                             Name: res/caf\xe9.png\n\
                             SHA1-Digest: aaaa\n\n\
                             Name: classes.dex\n\
                             SHA1-Digest: AbCdEf123==\n";
        assert_eq!(scan_bytes(bytes).unwrap(), "AbCdEf123==");
    }

    #[test]
    fn scan_first_line_after_marker_is_authoritative() {
        let text = "Name: classes.dex\n\
                    SHA-256-Digest: zzzz\n\
                    SHA1-Digest: AbCdEf123==\n";
        assert!(matches!(scan_text(text), Err(ExtractError::DigestLineMissing)));
    }

    #[test]
    fn scan_blank_line_after_marker_rejects() {
        let text = "Name: classes.dex\n\nSHA1-Digest: AbCdEf123==\n";
        assert!(matches!(scan_text(text), Err(ExtractError::DigestLineMissing)));
    }

    #[test]
    fn scan_does_not_retry_later_marker() {
        let text = "Name: classes.dex\n\
                    Other: x\n\
                    \n\
                    Name: classes.dex\n\
                    SHA1-Digest: later==\n";
        assert!(matches!(scan_text(text), Err(ExtractError::DigestLineMissing)));
    }

    #[test]
    fn scan_marker_missing() {
        let text = "Manifest-Version: 1.0\n\nName: lib.so\nSHA1-Digest: aaaa\n";
        assert!(matches!(scan_text(text), Err(ExtractError::MarkerNotFound)));
    }

    #[test]
    fn scan_marker_on_last_line() {
        assert!(matches!(
            scan_text("Name: classes.dex"),
            Err(ExtractError::DigestLineMissing)
        ));
    }

    #[test]
    fn scan_stops_pulling_after_digest() {
        let lines = vec![
            Ok("Name: classes.dex".to_string()),
            Ok("SHA1-Digest: AbCdEf123==".to_string()),
            Err(io::Error::new(io::ErrorKind::Other, "never read")),
        ];
        assert_eq!(
            scan_lines(lines, &DigestSpec::default()).unwrap(),
            "AbCdEf123=="
        );
    }

    #[test]
    fn scan_read_error_propagates() {
        let lines = vec![
            Ok("Manifest-Version: 1.0".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8")),
        ];
        assert!(matches!(
            scan_lines(lines, &DigestSpec::default()),
            Err(ExtractError::Read(_))
        ));
    }
}
